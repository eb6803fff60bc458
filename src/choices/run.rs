/// Where the point list comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, inquiry::Choice)]
pub enum InputSource {
    /// Generate - Synthesize unique random points and save them to the input file
    Generate,
    /// File - Read points from an existing input file
    File,
}

/// How the selection is run
#[derive(Debug, Clone, Copy, PartialEq, Eq, inquiry::Choice)]
pub enum RunMode {
    /// Normal - Run the selection and save the closest pairs
    Normal,
    /// Trace - Also record every insertion and write a trace report
    Trace,
}

/// Whether points should be synthesized before loading
pub fn generates(source: InputSource) -> bool {
    match source {
        InputSource::Generate => true,
        InputSource::File => false,
    }
}

/// Whether the run should record a trace report
pub fn traces(mode: RunMode) -> bool {
    match mode {
        RunMode::Normal => false,
        RunMode::Trace => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_entries_come_from_variant_docs() {
        assert_eq!(
            InputSource::Generate.to_string(),
            "Generate - Synthesize unique random points and save them to the input file"
        );
        assert_eq!(
            InputSource::File.to_string(),
            "File - Read points from an existing input file"
        );
        assert_eq!(
            RunMode::Trace.description(),
            "Trace - Also record every insertion and write a trace report"
        );
        assert!(RunMode::Normal.to_string().starts_with("Normal - "));
    }

    #[test]
    fn choices_map_to_flags() {
        assert!(generates(InputSource::Generate));
        assert!(!generates(InputSource::File));
        assert!(traces(RunMode::Trace));
        assert!(!traces(RunMode::Normal));
    }
}
