use crate::models::ProcessEntry;

/// Whether a worker matching `interpreter_name` and `entry` is running
///
/// A process counts only when its name equals the interpreter name and its
/// command line contains the entry path. Processes whose command line could
/// not be read never match.
pub fn is_already_running(snapshot: &[ProcessEntry], interpreter_name: &str, entry: &str) -> bool {
    snapshot
        .iter()
        .any(|process| is_match(process, interpreter_name, entry))
}

/// All processes in the snapshot matching the worker
pub fn matching_processes<'a>(
    snapshot: &'a [ProcessEntry],
    interpreter_name: &str,
    entry: &str,
) -> Vec<&'a ProcessEntry> {
    snapshot
        .iter()
        .filter(|process| is_match(process, interpreter_name, entry))
        .collect()
}

fn is_match(process: &ProcessEntry, interpreter_name: &str, entry: &str) -> bool {
    if !names_match(&process.name, interpreter_name) {
        return false;
    }

    match &process.cmdline {
        Some(cmdline) => cmdline.contains(entry),
        None => false,
    }
}

#[cfg(not(windows))]
fn names_match(process_name: &str, interpreter_name: &str) -> bool {
    process_name == interpreter_name
}

// Windows reports "pythonw.exe" and file names are case-insensitive
#[cfg(windows)]
fn names_match(process_name: &str, interpreter_name: &str) -> bool {
    fn stem(name: &str) -> &str {
        match name.len().checked_sub(4) {
            Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".exe") => &name[..cut],
            _ => name,
        }
    }

    stem(process_name).eq_ignore_ascii_case(stem(interpreter_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = "/srv/news/collector.py";

    fn snapshot() -> Vec<ProcessEntry> {
        vec![
            ProcessEntry::new(1, "systemd", Some("/sbin/init".to_string())),
            ProcessEntry::new(200, "bash", Some("bash".to_string())),
            ProcessEntry::new(300, "python3", Some("python3 /srv/news/app.py".to_string())),
        ]
    }

    #[test]
    fn no_match_in_unrelated_snapshot() {
        assert!(!is_already_running(&snapshot(), "python3", ENTRY));
        assert!(!is_already_running(&[], "python3", ENTRY));
    }

    #[test]
    fn match_among_other_processes() {
        let mut processes = snapshot();
        processes.push(ProcessEntry::new(
            400,
            "python3",
            Some(format!("python3 \"{}\"", ENTRY)),
        ));

        assert!(is_already_running(&processes, "python3", ENTRY));
        let found = matching_processes(&processes, "python3", ENTRY);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pid, 400);
    }

    #[test]
    fn name_only_match_is_not_enough() {
        let processes = vec![ProcessEntry::new(
            500,
            "python3",
            Some("python3 /srv/other/collector_v2.py".to_string()),
        )];

        assert!(!is_already_running(&processes, "python3", ENTRY));
    }

    #[test]
    fn cmdline_only_match_is_not_enough() {
        let processes = vec![ProcessEntry::new(
            600,
            "vim",
            Some(format!("vim {}", ENTRY)),
        )];

        assert!(!is_already_running(&processes, "python3", ENTRY));
    }

    #[test]
    fn unreadable_cmdline_is_excluded() {
        let processes = vec![
            ProcessEntry::new(700, "python3", None),
            ProcessEntry::new(701, "python3", Some(String::new())),
        ];

        assert!(!is_already_running(&processes, "python3", ENTRY));
    }

    #[test]
    fn name_match_is_exact() {
        let processes = vec![ProcessEntry::new(
            800,
            "python3.11",
            Some(format!("python3.11 {}", ENTRY)),
        )];

        assert!(!is_already_running(&processes, "python3", ENTRY));
    }

    #[cfg(windows)]
    #[test]
    fn windows_names_ignore_case_and_exe_suffix() {
        let processes = vec![ProcessEntry::new(
            900,
            "pythonw.exe",
            Some(format!("pythonw.exe \"{}\"", ENTRY)),
        )];

        assert!(is_already_running(&processes, "PythonW.exe", ENTRY));
        assert!(is_already_running(&processes, "pythonw", ENTRY));
    }
}
