//! Answer composition: apology template for empty retrievals, grouped-summary
//! prompt for everything else.

use hotel_store::HotelDoc;

use crate::extract::HotelFilter;

/// Fixed apology for the "no matching hotels" branch.
///
/// Absent filter fields render as empty strings. This branch never calls the
/// model.
pub fn no_results_answer(meta: &HotelFilter) -> String {
    format!(
        "Xin lỗi, hệ thống không tìm thấy khách sạn nào ở {} với rating {}. Vui lòng chọn lại rating khác.",
        meta.location_str(),
        meta.rating_str()
    )
}

/// Concatenates retrieved documents into the context block fed to the model.
///
/// Each document contributes its content followed by a `metadata:` line;
/// documents are separated by blank lines, preserving ranking order.
pub fn build_context_block(docs: &[HotelDoc]) -> String {
    docs.iter()
        .map(|doc| {
            let metadata =
                serde_json::to_string(&doc.metadata).unwrap_or_else(|_| "{}".to_string());
            format!("{}\nmetadata: {}", doc.content, metadata)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the Vietnamese summarization prompt over the combined context.
///
/// The instructions demand: use metadata without dumping it verbatim, never
/// print hotel IDs, group duplicate-ID entries into one hotel, and open with
/// the multi-hotel lead-in (location + rating) or the single-hotel lead-in
/// (hotel name) depending on how many distinct hotels the context covers.
pub fn build_compose_prompt(context_block: &str) -> String {
    format!(
        "- Tóm tắt thông tin của tất cả khách sạn trong {context_block}, \
         sử dụng dữ liệu từ metadata để bổ sung thông tin nhưng không in trực tiếp metadata.\n\
         Không cần in ra ID của khách sạn. Nếu có các khách sạn trùng ID trong context \
         thì có thể nhóm vào 1 khách sạn (vì cùng 1 khách sạn) in ra với các thông tin\n\
         'Địa chỉ, Mô tả, Đánh giá (rating), URL_khách sạn.'\n\
         Ngoài ra, nếu nhiều hơn 1 khách sạn thì câu đầu tiên nên ghi là \
         'Dưới đây là thông tin một số khách sạn ở location với rating' \
         (map location và rating tương ứng ở metadata).\n\
         Còn hỏi khách sạn cụ thể thì câu đầu nên ghi là \
         'Dưới đây là thông tin khách sạn hotel_name' (map hotel_name ở metadata)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn doc(content: &str, id: &str) -> HotelDoc {
        let mut metadata = BTreeMap::new();
        metadata.insert("hotel_id".to_string(), json!(id));
        HotelDoc {
            score: 0.9,
            content: content.to_string(),
            metadata,
        }
    }

    #[test]
    fn apology_matches_fixed_template() {
        let meta = crate::extract::parse_filter("{\"location\": \"Đà Lạt\", \"rating\": 4}")
            .unwrap();
        assert_eq!(
            no_results_answer(&meta),
            "Xin lỗi, hệ thống không tìm thấy khách sạn nào ở Đà Lạt với rating 4. Vui lòng chọn lại rating khác."
        );
    }

    #[test]
    fn apology_renders_absent_fields_as_empty() {
        let meta = HotelFilter::default();
        assert_eq!(
            no_results_answer(&meta),
            "Xin lỗi, hệ thống không tìm thấy khách sạn nào ở  với rating . Vui lòng chọn lại rating khác."
        );
    }

    #[test]
    fn context_block_joins_content_and_metadata() {
        let docs = vec![doc("Khách sạn A", "H1"), doc("Khách sạn B", "H2")];
        let block = build_context_block(&docs);
        assert!(block.contains("Khách sạn A\nmetadata: {\"hotel_id\":\"H1\"}"));
        assert!(block.contains("\n\n"));
        let first = block.find("Khách sạn A").unwrap();
        let second = block.find("Khách sạn B").unwrap();
        assert!(first < second, "ranking order must be preserved");
    }

    #[test]
    fn compose_prompt_carries_formatting_rules() {
        let prompt = build_compose_prompt("ctx");
        assert!(prompt.contains("không in trực tiếp metadata"));
        assert!(prompt.contains("Không cần in ra ID"));
        assert!(prompt.contains("trùng ID"));
        assert!(prompt.contains("Dưới đây là thông tin một số khách sạn ở location với rating"));
        assert!(prompt.contains("Dưới đây là thông tin khách sạn hotel_name"));
    }
}
