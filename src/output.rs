use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

/// Prepends the event name to every label, the form titles are published in.
pub fn label_lines(event_name: &str, labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|label| format!("{} - {label}", event_name.trim()))
        .collect()
}

/// Writes one title per line, replacing any existing file.
pub fn write_labels(path: &Path, event_name: &str, labels: &[String]) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("create output dir {}: {e}", parent.display()))?;
    }
    let file = fs::File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in label_lines(event_name, labels) {
        writeln!(writer, "{line}").map_err(|e| format!("write {}: {e}", path.display()))?;
    }
    writer
        .flush()
        .map_err(|e| format!("write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec![
            "Pools Winners Round 1 - AL (Mario) VS BO (Fox)".to_string(),
            "Top 8 Grand Final - AL (Mario) VS BO (Fox)".to_string(),
        ]
    }

    #[test]
    fn test_label_lines_prefix_event_name() {
        assert_eq!(
            label_lines("KGB13", &labels()),
            vec![
                "KGB13 - Pools Winners Round 1 - AL (Mario) VS BO (Fox)".to_string(),
                "KGB13 - Top 8 Grand Final - AL (Mario) VS BO (Fox)".to_string(),
            ]
        );
    }

    #[test]
    fn test_write_labels_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("sets.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale line\n").unwrap();

        write_labels(&path, "KGB13", &labels()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "KGB13 - Pools Winners Round 1 - AL (Mario) VS BO (Fox)\n\
             KGB13 - Top 8 Grand Final - AL (Mario) VS BO (Fox)\n"
        );
    }

    #[test]
    fn test_write_no_labels_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sets.txt");
        write_labels(&path, "KGB13", &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
