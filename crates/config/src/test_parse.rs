#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = load_from_str("()", None).unwrap();
        assert_eq!(cfg, LayoutConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let ron = r#"(
            margin: 12,
            default_width: 320,
            snap_on_drag: true,
            history_flush: background,
        )"#;
        let cfg = load_from_str(ron, None).unwrap();
        assert_eq!(cfg.margin, 12);
        assert_eq!(cfg.default_width, 320);
        assert_eq!(cfg.default_height, 200);
        assert!(cfg.snap_on_drag);
        assert_eq!(cfg.history_flush, HistoryFlush::Background);
    }

    #[test]
    fn history_path_accepts_implicit_some() {
        let cfg = load_from_str(r#"(history_path: "/var/tmp/pos.json")"#, None).unwrap();
        assert_eq!(cfg.history_path, Some(PathBuf::from("/var/tmp/pos.json")));
    }

    #[test]
    fn unknown_field_reports_location() {
        let ron = "(\n  margin: 4,\n  marginn: 5,\n)";
        match load_from_str(ron, None) {
            Err(Error::Parse { line, excerpt, .. }) => {
                assert_eq!(line, 3);
                assert!(excerpt.contains("marginn"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn validation_error_carries_path() {
        let err = load_from_str("(min_height: 0)", Some(Path::new("/x/layout.ron"))).unwrap_err();
        match &err {
            Error::Validation { field, .. } => assert_eq!(*field, "min_height"),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(err.path(), Some(Path::new("/x/layout.ron")));
    }
}
