#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAddedWithId(u32),
    TaskCompleted(u32),
    TaskReopened(u32),
    TaskRemoved(u32),
    ConfirmRemoveTask(String),
    TasksHeader,
    LastSynced(String), // formatted local time
    FilterCounts {
        all: usize,
        pending: usize,
        completed: usize,
    },
    NoTasksFound,
    NoCompletedTasks,
    NoPendingTasks,
    LocalBadge,

    // === SYNC MESSAGES ===
    LoadingTasks,
    TasksSynced(usize),
    TasksRestored(usize),
    TasksUnavailable(String),

    // === STORAGE MESSAGES ===
    ConfirmClearStorage,
    StorageCleared,
    StorageClearFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleSource,
    InvalidEnvLimit(String),
    InvalidConfigLimit(usize),

    // === PROMPTS ===
    PromptTaskTitle,
    PromptApiUrl,
    PromptFetchLimit,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    CommandFailed(String),
}
