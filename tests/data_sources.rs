#[cfg(test)]
mod tests {
    use inout::data::json_file::JsonFileEntries;
    use inout::data::sample::SampleEntries;
    use inout::data::{provider, DataError, EntryProvider};
    use inout::libs::config::{Config, DataConfig};
    use inout::libs::summary::compute_weekly_summary;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DataTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for DataTestContext {
        fn setup() -> Self {
            DataTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    const SHIFTS_JSON: &str = r#"[
        {
            "id": "E-1",
            "date": "Mon, 6 Jan",
            "checkIn": "08:00",
            "checkOut": "17:15",
            "total": "9h 15m",
            "location": "North Gate",
            "status": "Validated"
        },
        {
            "id": "E-2",
            "date": "Tue, 7 Jan",
            "checkIn": "08:10",
            "checkOut": "12:40",
            "total": "4h 30m",
            "location": "Mobile app",
            "status": "Correction"
        }
    ]"#;

    #[test]
    fn test_sample_entries() {
        let entries = SampleEntries.fetch_entries().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].id, "E-9845");
        assert_eq!(entries[0].check_in, "07:58");
        assert_eq!(entries[1].status, "Correction");
        assert_eq!(entries.iter().map(|e| e.minutes()).sum::<i64>(), 1781);
    }

    #[test_context(DataTestContext)]
    #[test]
    fn test_json_file_entries(ctx: &mut DataTestContext) {
        let path = ctx.temp_dir.path().join("shifts.json");
        std::fs::write(&path, SHIFTS_JSON).unwrap();

        let entries = JsonFileEntries::new(path).fetch_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].check_out, "17:15");
        assert_eq!(entries[1].location, "Mobile app");

        let summary = compute_weekly_summary(&entries);
        assert_eq!(summary.actual_minutes, 825);
        assert_eq!(summary.formatted_actual, "13h 45m");
    }

    #[test_context(DataTestContext)]
    #[test]
    fn test_json_file_missing(ctx: &mut DataTestContext) {
        let path = ctx.temp_dir.path().join("missing.json");
        let err = JsonFileEntries::new(path).fetch_entries().unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test_context(DataTestContext)]
    #[test]
    fn test_json_file_malformed(ctx: &mut DataTestContext) {
        let path = ctx.temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonFileEntries::new(path).fetch_entries().unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test_context(DataTestContext)]
    #[test]
    fn test_provider_follows_config(ctx: &mut DataTestContext) {
        let default_entries = provider(&Config::default()).fetch_entries().unwrap();
        assert_eq!(default_entries, SampleEntries::entries());

        let path = ctx.temp_dir.path().join("shifts.json");
        std::fs::write(&path, SHIFTS_JSON).unwrap();
        let config = Config {
            data: Some(DataConfig { entries_file: path }),
        };
        let file_entries = provider(&config).fetch_entries().unwrap();
        assert_eq!(file_entries.len(), 2);
        assert_eq!(file_entries[0].id, "E-1");
    }
}
