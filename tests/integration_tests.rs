use dot_batch::core::engine::exit_status;
use dot_batch::{
    render_directory, BatchRenderer, LocalDirectory, ProcessRenderer, RenderEngine, RenderError,
    RenderSettings, RenderStatus,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn graph_dir(names: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in names {
        std::fs::write(temp_dir.path().join(name), "digraph G { 1 -> 0 }").unwrap();
    }
    temp_dir
}

fn settings_for(dir: &Path, renderer: &str) -> RenderSettings {
    RenderSettings {
        renderer: renderer.to_string(),
        ..RenderSettings::new(dir.to_str().unwrap())
    }
}

fn sorted_inputs(report: &dot_batch::RenderReport) -> Vec<PathBuf> {
    let mut inputs: Vec<_> = report.outcomes.iter().map(|o| o.job.input.clone()).collect();
    inputs.sort();
    inputs
}

#[tokio::test]
async fn test_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("graphs");

    let result = render_directory(missing.to_str().unwrap()).await;

    assert!(matches!(
        result,
        Err(RenderError::DirectoryUnavailable { .. })
    ));
    assert_eq!(exit_status(&result), 1);
}

#[tokio::test]
async fn test_dry_run_plans_matching_entries_only() {
    let temp_dir = graph_dir(&["a.dot", "b.DOT", "c.txt", "d.dot"]);
    std::fs::create_dir(temp_dir.path().join("nested")).unwrap();
    std::fs::write(temp_dir.path().join("nested").join("e.dot"), "digraph G {}").unwrap();

    let mut settings = settings_for(temp_dir.path(), "dot");
    settings.dry_run = true;
    let batch = BatchRenderer::new(LocalDirectory::new(), ProcessRenderer::default(), settings);

    let report = RenderEngine::new(batch).run().await.unwrap();

    assert_eq!(
        sorted_inputs(&report),
        vec![temp_dir.path().join("a.dot"), temp_dir.path().join("d.dot")]
    );
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.status == RenderStatus::Skipped));
    assert!(!temp_dir.path().join("a.ps").exists());
    assert!(!temp_dir.path().join("d.ps").exists());
}

#[tokio::test]
async fn test_missing_renderer_is_not_fatal() {
    let temp_dir = graph_dir(&["a.dot", "b.dot"]);
    let settings = settings_for(temp_dir.path(), "dot-batch-no-such-renderer");
    let renderer = ProcessRenderer::new(settings.renderer.clone());
    let batch = BatchRenderer::new(LocalDirectory::new(), renderer, settings);

    let report = RenderEngine::new(batch).run().await.unwrap();

    assert_eq!(report.attempted(), 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(exit_status(&Ok(report.clone())), 0);
    assert!(report
        .failures()
        .all(|o| matches!(o.status, RenderStatus::SpawnFailed { .. })));
}

#[tokio::test]
async fn test_fail_on_error_surfaces_failures() {
    let temp_dir = graph_dir(&["a.dot", "notes.md"]);
    let settings = settings_for(temp_dir.path(), "dot-batch-no-such-renderer");
    let renderer = ProcessRenderer::new(settings.renderer.clone());
    let batch = BatchRenderer::new(LocalDirectory::new(), renderer, settings);

    let result = RenderEngine::new(batch)
        .with_fail_on_error(true)
        .run()
        .await;

    assert_eq!(exit_status(&result), 2);
    match result {
        Err(RenderError::RenderFailures { failed, attempted }) => {
            assert_eq!(failed, 1);
            assert_eq!(attempted, 1);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_each_source_gets_one_invocation() {
    let temp_dir = graph_dir(&["0.dot", "1.dot", "2.dot", "readme.txt"]);
    let settings = settings_for(temp_dir.path(), "true");
    let renderer = ProcessRenderer::new("true");
    let batch = BatchRenderer::new(LocalDirectory::new(), renderer, settings);
    let engine = RenderEngine::new(batch).with_fail_on_error(true);

    let first = engine.run().await.unwrap();
    let second = engine.run().await.unwrap();

    assert_eq!(first.succeeded(), 3);
    assert_eq!(sorted_inputs(&first), sorted_inputs(&second));
    for outcome in &first.outcomes {
        assert_eq!(outcome.job.output.with_extension("dot"), outcome.job.input);
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_zero_exit_is_recorded() {
    let temp_dir = graph_dir(&["broken.dot"]);
    let settings = settings_for(temp_dir.path(), "false");
    let renderer = ProcessRenderer::new("false");
    let batch = BatchRenderer::new(LocalDirectory::new(), renderer, settings);

    let report = RenderEngine::new(batch).run().await.unwrap();

    assert_eq!(
        report.outcomes[0].status,
        RenderStatus::Failed { code: Some(1) }
    );
    assert_eq!(
        report.outcomes[0].job.output,
        temp_dir.path().join("broken.ps")
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_output_suffix_matches_rendered_format() {
    let temp_dir = graph_dir(&["a.dot"]);
    let mut settings = settings_for(temp_dir.path(), "true");
    settings.format = "svg".to_string();
    let batch = BatchRenderer::new(LocalDirectory::new(), ProcessRenderer::new("true"), settings);

    let report = RenderEngine::new(batch).run().await.unwrap();

    let job = &report.outcomes[0].job;
    assert_eq!(job.format, "svg");
    assert_eq!(job.output, temp_dir.path().join("a.svg"));
    assert_eq!(ProcessRenderer::args(job)[0], std::ffi::OsString::from("-Tsvg"));
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_non_utf8_names_are_rendered() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = graph_dir(&["ok.dot"]);
    let odd = OsStr::from_bytes(b"g\xff.dot");
    std::fs::write(temp_dir.path().join(odd), "digraph G {}").unwrap();

    let mut settings = settings_for(temp_dir.path(), "dot");
    settings.dry_run = true;
    let batch = BatchRenderer::new(LocalDirectory::new(), ProcessRenderer::default(), settings);

    let report = batch.render_all().await.unwrap();

    assert_eq!(report.attempted(), 2);
    assert!(report
        .outcomes
        .iter()
        .any(|o| o.job.output == temp_dir.path().join(OsStr::from_bytes(b"g\xff.ps"))));
}
