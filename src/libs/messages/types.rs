#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleTracker,
    ConfigModuleSchedule,
    PromptSelectModules,
    PromptApiUrl,
    PromptSignInTime,
    PromptSignInPeriod,
    PromptSignOutTime,
    PromptSignOutPeriod,
    PromptNotify,
    PromptSkipDays,
    TrackerConfigNotFound,

    // === FETCH MESSAGES ===
    FetchingRecords,
    FetchFailed(String), // transport or decode error text

    // === DASHBOARD MESSAGES ===
    NoAttendanceRecords,
    TodayHeader(String),      // local date
    DetailHeader(String),     // formatted date
    HolidayDay(String),       // formatted date
    NoRecordsForDate(String), // date as the user gave it
    RecordError(String),      // upstream error text, passed through
    NoRecordData,
    InvalidDateFormat(String), // rejected input

    // === EXPORT MESSAGES ===
    ExportingData,
    ExportCompleted(String), // output path
}
