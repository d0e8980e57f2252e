#[cfg(test)]
mod tests {
    use clap::Parser;
    use mytasks::commands::Cli;
    use mytasks::db::blob_store::{BlobStore, SqliteBlobStore};
    use mytasks::libs::cache::{TaskCache, STORAGE_KEY};
    use mytasks::libs::config::{ENV_API_URL, ENV_LIMIT};
    use mytasks::libs::error::TaskError;
    use mytasks::libs::task::Task;
    use serde_json::json;
    use std::sync::{Arc, OnceLock};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tokio::sync::{Mutex, OwnedMutexGuard};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Commands read `HOME` and the `MYTASKS_*` variables, so tests in this
    /// file take turns.
    fn env_lock() -> Arc<Mutex<()>> {
        static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
        LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone()
    }

    struct CommandTestContext {
        _guard: OwnedMutexGuard<()>,
        _temp_dir: TempDir,
        server: MockServer,
    }

    impl AsyncTestContext for CommandTestContext {
        async fn setup() -> Self {
            let guard = env_lock().lock_owned().await;
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
            std::env::remove_var(ENV_LIMIT);

            let server = MockServer::start().await;
            std::env::set_var(ENV_API_URL, format!("{}/todos", server.uri()));

            CommandTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                server,
            }
        }
    }

    impl CommandTestContext {
        /// Answers `expected` GET requests with `count` todos.
        async fn serve_todos(&self, count: u32, expected: u64) {
            let todos: Vec<_> = (1..=count)
                .map(|id| json!({"userId": 1, "id": id, "title": format!("todo {}", id), "completed": false}))
                .collect();
            Mock::given(method("GET"))
                .and(path("/todos"))
                .respond_with(ResponseTemplate::new(200).set_body_json(todos))
                .expect(expected)
                .mount(&self.server)
                .await;
        }
    }

    async fn run(args: &[&str]) -> anyhow::Result<()> {
        let argv = std::iter::once("mytasks").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().run().await
    }

    fn stored_tasks() -> Vec<Task> {
        TaskCache::new(SqliteBlobStore::new().unwrap())
            .load()
            .unwrap()
            .map(|s| s.tasks)
            .unwrap_or_default()
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_list_fetches_once_then_restores(ctx: &mut CommandTestContext) {
        ctx.serve_todos(25, 1).await;

        run(&["list"]).await.unwrap();
        run(&["list", "--filter", "completed"]).await.unwrap();

        assert_eq!(stored_tasks().len(), 20);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_add_and_list_without_network_or_cache(_ctx: &mut CommandTestContext) {
        std::env::set_var(ENV_API_URL, "http://127.0.0.1:1/todos");

        run(&["list"]).await.unwrap();
        run(&["add", "Buy milk"]).await.unwrap();

        let tasks = stored_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(tasks[0].is_local);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_sync_uses_limit_from_environment(ctx: &mut CommandTestContext) {
        ctx.serve_todos(10, 1).await;
        std::env::set_var(ENV_LIMIT, "3");

        run(&["sync"]).await.unwrap();

        let ids: Vec<u32> = stored_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_toggle_persists(ctx: &mut CommandTestContext) {
        ctx.serve_todos(3, 1).await;

        run(&["toggle", "2"]).await.unwrap();

        let tasks = stored_tasks();
        assert!(tasks.iter().find(|t| t.id == 2).unwrap().completed);
        assert!(!tasks.iter().find(|t| t.id == 1).unwrap().completed);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_remove_with_yes_skips_prompt(ctx: &mut CommandTestContext) {
        ctx.serve_todos(3, 1).await;

        run(&["remove", "2", "--yes"]).await.unwrap();

        let ids: Vec<u32> = stored_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_remove_unknown_id_fails_before_prompt(ctx: &mut CommandTestContext) {
        ctx.serve_todos(3, 1).await;

        let err = run(&["remove", "99"]).await.unwrap_err();

        assert!(matches!(err.downcast_ref::<TaskError>(), Some(TaskError::TaskNotFound(99))));
        assert_eq!(stored_tasks().len(), 3);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_clear_with_yes_then_list_fetches_again(ctx: &mut CommandTestContext) {
        ctx.serve_todos(3, 2).await;
        run(&["list"]).await.unwrap();

        run(&["clear", "-y"]).await.unwrap();
        assert!(SqliteBlobStore::new().unwrap().get(STORAGE_KEY).unwrap().is_none());

        run(&["list"]).await.unwrap();
        assert_eq!(stored_tasks().len(), 3);
    }
}
