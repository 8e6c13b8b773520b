use std::path::{Path, PathBuf};

#[cfg(feature = "trace-log")]
use color_eyre::eyre::{Result, eyre};

const LOG_FILE_NAME: &str = "procwatch-trace.jsonl";

/// JSON-lines trace file in the system temp directory. The terminal is
/// owned by the UI, so traces never go to stdout or stderr.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

#[cfg(feature = "trace-log")]
pub fn init_tracing_json(output_path: &Path) -> Result<()> {
    use std::fs::File;
    use std::sync::Mutex;

    use tracing_subscriber::fmt::format::FmtSpan;

    ensure_parent_dir(output_path)?;
    let file = File::create(output_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

#[cfg_attr(not(feature = "trace-log"), allow(dead_code))]
fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lives_in_temp_dir() {
        let path = default_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.file_name().and_then(|s| s.to_str()), Some(LOG_FILE_NAME));
    }

    #[test]
    fn parent_dir_is_created() {
        let dir = std::env::temp_dir().join(format!("procwatch-trace-test-{}", std::process::id()));
        let nested = dir.join("nested").join("trace.jsonl");
        ensure_parent_dir(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bare_file_name_needs_no_parent() {
        ensure_parent_dir(Path::new("trace.jsonl")).unwrap();
    }
}
