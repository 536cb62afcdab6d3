/// One row of a process snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    /// Process ID
    pub pid: u32,
    /// Executable name as reported by the OS
    pub name: String,
    /// Full command line joined with spaces; `None` when it is empty or unreadable
    pub cmdline: Option<String>,
}

impl ProcessEntry {
    pub fn new(pid: u32, name: impl Into<String>, cmdline: Option<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            cmdline: cmdline.filter(|c| !c.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cmdline_is_unavailable() {
        let entry = ProcessEntry::new(42, "python3", Some("   ".to_string()));
        assert_eq!(entry.cmdline, None);

        let entry = ProcessEntry::new(42, "python3", Some("python3 collector.py".to_string()));
        assert_eq!(entry.cmdline.as_deref(), Some("python3 collector.py"));
    }
}
