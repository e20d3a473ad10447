#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigReadFailed(String), // path
    ConfigModuleData,

    // === DATA SOURCE MESSAGES ===
    DataSourceSample,
    DataSourceFile(String), // path
    EntriesLoadFailed,
    NoShiftEntries,

    // === SUMMARY MESSAGES ===
    WeeklySummaryHeader(String), // date
    ProgressCompleted {
        progress: u8,
        variance: String,
    },
    HistoryHeader,

    // === EXPORT MESSAGES ===
    ExportSuccess(String), // path

    // === PROMPTS ===
    PromptSelectModules,
    PromptEntriesFile,
}
