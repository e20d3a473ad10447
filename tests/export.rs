#[cfg(test)]
mod tests {
    use inout::data::json_file::JsonFileEntries;
    use inout::data::sample::SampleEntries;
    use inout::data::EntryProvider;
    use inout::libs::export::{ExportData, ExportFormat, Exporter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_history_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("history.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(ExportData::History, &SampleEntries::entries()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "ID,Date,Check In,Check Out,Total,Minutes,Location,Status");
        assert_eq!(lines[1], "E-9845,\"Mon, 23 Dec\",07:58,16:32,8h 34m,514,North Gate,Validated");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_summary_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("summary.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(ExportData::Summary, &SampleEntries::entries()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("Target,2400,40h 00m"));
        assert!(content.contains("Actual,1781,29h 41m"));
        assert!(content.contains("Variance,-619,-10h 19m"));
        assert!(content.contains("Progress,74,74%"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_summary_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("summary.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(ExportData::Summary, &SampleEntries::entries()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["actual_minutes"], 1781);
        assert_eq!(json["progress_percent"], 74);
        assert_eq!(json["formatted_target"], "40h 00m");
        assert_eq!(json["variance_label"], "-10h 19m");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_history_json_export_loads_as_data_file(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("history.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        let written = exporter.export(ExportData::History, &SampleEntries::entries()).unwrap();
        assert_eq!(written, output_path.as_path());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("\"checkIn\""));

        let loaded = JsonFileEntries::new(output_path).fetch_entries().unwrap();
        assert_eq!(loaded, SampleEntries::entries());
    }

    #[test]
    fn test_default_output_path() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("inout_export_"));
        assert!(name.ends_with(".json"));
    }
}
