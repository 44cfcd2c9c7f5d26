//! Tests for the code usage tool

#[cfg(test)]
mod code_usage_tests {
    use crate::tools::file_ops::code_usage::reader::MockSourceReader;
    use crate::tools::file_ops::code_usage::summary::MockUsageSummarizer;
    use crate::tools::file_ops::code_usage::{CodeUsageTool, SearchResult};
    use scout_core::config::SearchDefaults;
    use scout_core::tools::base::{Tool, ToolError};
    use scout_core::tools::types::ToolCall;
    use serde_json::json;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::fs;

    fn create_tool_call(id: &str, args: serde_json::Value) -> ToolCall {
        ToolCall::from_json(id, "search_code_usage", args)
    }

    async fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.unwrap();
        }
        fs::write(path, content).await.unwrap();
    }

    fn search_result(result: &scout_core::tools::types::ToolResult) -> SearchResult {
        serde_json::from_value(result.metadata["search_result"].clone()).unwrap()
    }

    #[tokio::test]
    async fn test_declaration_and_usage_in_one_file() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "users.js",
            "function getUserById(id) {\n  return users[id];\n}\n\nconst admin = getUserById(42);\n",
        )
        .await;

        let tool = CodeUsageTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-1",
            json!({ "root_path": ".", "term": "getUserById" }),
        );

        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.call_id, "test-1");
        assert_eq!(result.metadata["term"], json!("getUserById"));
        assert_eq!(result.metadata["total_files"], json!(1));

        let parsed = search_result(&result);
        let matches = &parsed.results[0].matches;
        let declarations = matches
            .iter()
            .filter(|m| m.kind.as_str() == "declaration")
            .count();
        assert_eq!(declarations, 1);
        assert!(matches.iter().any(|m| m.kind.as_str() == "usage" && m.line_number == 5));

        let output = result.output.as_deref().unwrap();
        assert!(output.contains("Total occurrences:"));
        assert!(output.contains("users.js"));
    }

    #[tokio::test]
    async fn test_empty_directory_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let tool = CodeUsageTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-2", json!({ "root_path": ".", "term": "anything" }));

        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.metadata["total_files"], json!(0));
        assert_eq!(result.metadata["total_matches"], json!(0));
        assert!(result.output.as_deref().unwrap().starts_with("No code files found in"));
        assert!(search_result(&result).results.is_empty());
    }

    #[tokio::test]
    async fn test_global_cap_stops_before_next_file() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.js", "run();\nrun();\n").await;
        write(temp_dir.path(), "b.js", "run();\nrun();\n").await;

        let mut reader = MockSourceReader::new();
        reader
            .expect_read()
            .withf(|path| path.ends_with("a.js"))
            .times(1)
            .returning(|_| Ok(b"run();\nrun();\n".to_vec()));

        let tool = CodeUsageTool::with_working_directory(temp_dir.path())
            .with_reader(Arc::new(reader));
        let call = create_tool_call(
            "test-3",
            json!({ "root_path": ".", "term": "run", "max_results": 1 }),
        );

        let result = tool.execute(&call).await.unwrap();
        let parsed = search_result(&result);
        assert_eq!(parsed.total_files, 2);
        assert_eq!(parsed.total_matches, 1);
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].matches.len(), 1);
        assert!(parsed.results[0].path.ends_with("a.js"));
    }

    #[tokio::test]
    async fn test_unreadable_file_contributes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.js", "run();\n").await;
        write(temp_dir.path(), "b.js", "run();\n").await;

        let mut reader = MockSourceReader::new();
        reader
            .expect_read()
            .withf(|path| path.ends_with("a.js"))
            .returning(|_| {
                Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "deleted during scan",
                ))
            });
        reader
            .expect_read()
            .withf(|path| path.ends_with("b.js"))
            .returning(|_| Ok(b"run();\n".to_vec()));

        let tool = CodeUsageTool::with_working_directory(temp_dir.path())
            .with_reader(Arc::new(reader));
        let call = create_tool_call("test-4", json!({ "root_path": ".", "term": "run" }));

        let parsed = search_result(&tool.execute(&call).await.unwrap());
        assert_eq!(parsed.total_files, 2);
        assert_eq!(parsed.results.len(), 1);
        assert!(parsed.results[0].path.ends_with("b.js"));
    }

    #[tokio::test]
    async fn test_binary_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("blob.js"), b"run(\0\0\xff")
            .await
            .unwrap();
        write(temp_dir.path(), "main.js", "run();\n").await;

        let tool = CodeUsageTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-5", json!({ "root_path": ".", "term": "run" }));

        let parsed = search_result(&tool.execute(&call).await.unwrap());
        assert_eq!(parsed.total_files, 2);
        assert_eq!(parsed.results.len(), 1);
        assert!(parsed.results[0].path.ends_with("main.js"));
    }

    #[tokio::test]
    async fn test_missing_arguments_fail_fast() {
        let tool = CodeUsageTool::with_working_directory("/nonexistent");

        let call = create_tool_call("test-6", json!({ "term": "run" }));
        assert!(tool.validate(&call).is_err());
        let err = tool.execute(&call).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let call = create_tool_call("test-6", json!({ "root_path": "." }));
        let result = tool.execute_with_timing(&call).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("term"));
    }

    #[tokio::test]
    async fn test_file_types_are_normalized() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "tool.py", "def run():\n    pass\n").await;
        write(temp_dir.path(), "tool.js", "run();\n").await;

        let tool = CodeUsageTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-7",
            json!({ "root_path": ".", "term": "run", "file_types": ["PY"] }),
        );

        let parsed = search_result(&tool.execute(&call).await.unwrap());
        assert_eq!(parsed.total_files, 1);
        assert!(parsed.results[0].path.ends_with("tool.py"));
        assert_eq!(parsed.results[0].matches[0].kind.as_str(), "declaration");
    }

    #[tokio::test]
    async fn test_context_lines_window() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.js", "one\ntwo\nrun();\nfour\nfive\nsix\n").await;

        let tool = CodeUsageTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-8",
            json!({ "root_path": ".", "term": "run", "context_lines": 2 }),
        );

        let parsed = search_result(&tool.execute(&call).await.unwrap());
        assert_eq!(
            parsed.results[0].matches[0].context,
            "one\ntwo\nrun();\nfour\nfive"
        );
    }

    #[tokio::test]
    async fn test_tool_defaults_fill_omitted_inputs() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.go", "func run() {}\nrun()\n").await;
        write(temp_dir.path(), "a.js", "run();\n").await;

        let defaults = SearchDefaults {
            file_types: vec![".go".to_string()],
            include_declarations: false,
            ..SearchDefaults::default()
        };
        let tool = CodeUsageTool::with_working_directory(temp_dir.path()).with_defaults(defaults);
        let call = create_tool_call("test-9", json!({ "root_path": ".", "term": "run" }));

        let parsed = search_result(&tool.execute(&call).await.unwrap());
        assert_eq!(parsed.total_files, 1);
        assert!(
            parsed.results[0]
                .matches
                .iter()
                .all(|m| m.kind.as_str() == "usage")
        );
    }

    #[tokio::test]
    async fn test_summarizer_analysis_is_appended() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.js", "run();\n").await;

        let mut summarizer = MockUsageSummarizer::new();
        summarizer
            .expect_summarize()
            .withf(|request| {
                request.term == "run"
                    && request.total_matches == 1
                    && request.reference_file.as_deref() == Some("NOTES.md")
            })
            .times(1)
            .returning(|_| Ok("Called once from the entry point.".to_string()));

        let tool = CodeUsageTool::with_working_directory(temp_dir.path())
            .with_summarizer(Arc::new(summarizer));
        let call = create_tool_call(
            "test-10",
            json!({ "root_path": ".", "term": "run", "reference_file": "NOTES.md" }),
        );

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.metadata["reference_file"], json!("NOTES.md"));
        let output = result.output.as_deref().unwrap();
        assert!(output.contains("Analysis:\nCalled once from the entry point."));
    }

    #[tokio::test]
    async fn test_summarizer_failure_keeps_results() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.js", "run();\n").await;

        let mut summarizer = MockUsageSummarizer::new();
        summarizer
            .expect_summarize()
            .returning(|_| Err(ToolError::ExecutionFailed("model offline".to_string())));

        let tool = CodeUsageTool::with_working_directory(temp_dir.path())
            .with_summarizer(Arc::new(summarizer));
        let call = create_tool_call("test-11", json!({ "root_path": ".", "term": "run" }));

        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.metadata["total_matches"], json!(1));
        assert!(!result.output.as_deref().unwrap().contains("Analysis:"));
    }

    #[tokio::test]
    async fn test_summarizer_not_called_without_files() {
        let temp_dir = TempDir::new().unwrap();

        let mut summarizer = MockUsageSummarizer::new();
        summarizer.expect_summarize().times(0);

        let tool = CodeUsageTool::with_working_directory(temp_dir.path())
            .with_summarizer(Arc::new(summarizer));
        let call = create_tool_call("test-12", json!({ "root_path": ".", "term": "run" }));

        assert!(tool.execute(&call).await.unwrap().success);
    }

    #[tokio::test]
    async fn test_repeated_searches_are_identical() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/a.ts", "const total = 1;\nlog(total);\n").await;
        write(temp_dir.path(), "src/b.py", "total = 2\nprint(total)\n").await;
        write(temp_dir.path(), "lib/c.go", "var total int\n").await;

        let tool = CodeUsageTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-13", json!({ "root_path": ".", "term": "total" }));

        let first = search_result(&tool.execute(&call).await.unwrap());
        let second = search_result(&tool.execute(&call).await.unwrap());
        assert_eq!(first, second);
        assert_eq!(first.results.len(), 3);
    }

    #[tokio::test]
    async fn test_file_as_root_finds_no_files() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.js", "run();\n").await;

        let tool = CodeUsageTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-14", json!({ "root_path": "a.js", "term": "run" }));

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.metadata["total_files"], json!(0));
        assert_eq!(result.metadata["total_matches"], json!(0));
        assert!(result.output.as_deref().unwrap().starts_with("No code files found in"));
    }

    #[test]
    fn test_schema_and_flags() {
        let tool = CodeUsageTool::with_working_directory("/tmp");
        assert_eq!(tool.name(), "search_code_usage");
        assert!(tool.is_read_only());
        assert_eq!(tool.max_execution_time(), Some(120));

        let schema = tool.schema();
        assert_eq!(schema.parameters["required"], json!(["root_path", "term"]));
        assert_eq!(schema.parameters["properties"]["max_results"]["default"], json!(50));
        assert_eq!(
            schema.parameters["properties"]["file_types"]["items"],
            json!({ "type": "string" })
        );
    }
}
