#[cfg(test)]
mod tests {
    use inout::libs::data_storage::{DataStorage, APP_NAME, VENDOR_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            StorageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_path_creates_directory(ctx: &mut StorageTestContext) {
        let storage = DataStorage::at(ctx.temp_dir.path());
        let expected_dir = ctx.temp_dir.path().join(VENDOR_NAME).join(APP_NAME);
        assert!(!expected_dir.exists());

        let path = storage.get_path("config.json").unwrap();
        assert!(expected_dir.is_dir());
        assert_eq!(path, expected_dir.join("config.json"));
        assert!(!path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_path_reuses_existing_directory(ctx: &mut StorageTestContext) {
        let storage = DataStorage::at(ctx.temp_dir.path());
        let first = storage.get_path("config.json").unwrap();
        std::fs::write(&first, "{}").unwrap();

        let second = storage.get_path("config.json").unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(second).unwrap(), "{}");
    }
}
