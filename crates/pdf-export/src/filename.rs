//! Export filename

use cjk_text::sanitize_filename_component;

/// Appended to the sanitized client name
pub const FILENAME_SUFFIX: &str = "_Offshore_Asset_Allocation.pdf";

/// Filename of the exported PDF for a client
///
/// # Example
/// ```
/// use pdf_export::export_filename;
///
/// assert_eq!(
///     export_filename("陈总 (Mr. Chen)"),
///     "陈总__Mr__Chen__Offshore_Asset_Allocation.pdf"
/// );
/// ```
pub fn export_filename(client_name: &str) -> String {
    format!("{}{}", sanitize_filename_component(client_name), FILENAME_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename("Wang Li"),
            "Wang_Li_Offshore_Asset_Allocation.pdf"
        );
        assert_eq!(
            export_filename("李，王"),
            "李_王_Offshore_Asset_Allocation.pdf"
        );
    }

    #[test]
    fn test_empty_client_name() {
        assert_eq!(export_filename(""), FILENAME_SUFFIX);
    }

    #[test]
    fn test_no_path_separators() {
        let name = export_filename("../../etc/passwd");
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
    }
}
