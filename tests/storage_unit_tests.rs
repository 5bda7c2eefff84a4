//! Unit tests for record file loading and saving

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use roster::error::RosterError;
    use roster::records::Student;
    use roster::storage::{LoadPolicy, load_students, save_students};
    use roster::system::{System as _, mock::MockSystem};
    use std::path::Path;

    fn sample() -> Vec<Student> {
        vec![
            Student::new("Горшков В.И.", "1", "2 3 4 5 5").unwrap(),
            Student::new("Харченко Б.Р.", "02", "5 4 5 4 3").unwrap(),
        ]
    }

    fn roster_error(err: &anyhow::Error) -> &RosterError {
        err.downcast_ref::<RosterError>().unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let system = MockSystem::new().with_dir("/data").unwrap();
        let path = Path::new("/data/students.json");

        save_students(&system, path, &sample()).unwrap();
        let report = load_students(&system, path, LoadPolicy::Strict).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.students, sample());
    }

    #[test]
    fn saved_file_is_indented_and_keeps_cyrillic() {
        let system = MockSystem::new().with_dir("/data").unwrap();
        let path = Path::new("/data/students.json");

        save_students(&system, path, &sample()).unwrap();
        let content = system.read_to_string(path).unwrap();

        assert!(content.starts_with("[\n    {\n        \"name\": \"Горшков В.И.\""));
        assert!(content.contains("\"number\": \"02\""));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let system = MockSystem::new()
            .with_file("/data/students.json", b"old contents")
            .unwrap();
        let path = Path::new("/data/students.json");

        save_students(&system, path, &[]).unwrap();
        assert_eq!(system.read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn save_to_unwritable_path_is_storage_error() {
        let system = MockSystem::new()
            .with_dir("/data")
            .unwrap()
            .with_read_only("/data/locked.json")
            .unwrap();

        let err = save_students(&system, Path::new("/data/locked.json"), &sample()).unwrap_err();
        assert!(matches!(roster_error(&err), RosterError::Storage { .. }));
        assert!(err.to_string().contains("Permission denied"));
    }

    #[test]
    fn save_to_missing_directory_is_storage_error() {
        let system = MockSystem::new();
        let err = save_students(&system, Path::new("/nowhere/students.json"), &sample())
            .unwrap_err();
        assert!(matches!(roster_error(&err), RosterError::Storage { .. }));
    }

    #[test]
    fn save_to_directory_is_storage_error() {
        let system = MockSystem::new().with_dir("/data").unwrap();
        let err = save_students(&system, Path::new("/data"), &sample()).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn load_nonexistent_file() {
        let system = MockSystem::new();
        let err = load_students(&system, Path::new("/missing.json"), LoadPolicy::Strict)
            .unwrap_err();
        assert!(matches!(roster_error(&err), RosterError::Storage { .. }));
        assert!(err.to_string().contains("Record file not found"));
    }

    #[test]
    fn load_malformed_json_is_format_error() {
        let system = MockSystem::new()
            .with_file("/bad.json", b"[{\"name\": \"A\",")
            .unwrap();
        let err = load_students(&system, Path::new("/bad.json"), LoadPolicy::Advisory)
            .unwrap_err();
        assert!(matches!(roster_error(&err), RosterError::Format { .. }));
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[test]
    fn strict_load_rejects_missing_field() {
        let system = MockSystem::new()
            .with_file(
                "/partial.json",
                r#"[{"name": "A", "number": "1"}]"#.as_bytes(),
            )
            .unwrap();

        let err = load_students(&system, Path::new("/partial.json"), LoadPolicy::Strict)
            .unwrap_err();
        assert!(matches!(roster_error(&err), RosterError::Validation { .. }));
        let message = err.to_string();
        assert!(message.contains("Path '/0'"));
        assert!(message.contains("\"z\""));
    }

    #[test]
    fn strict_load_rejects_empty_name() {
        let system = MockSystem::new()
            .with_file("/empty.json", br#"[{"name": "", "number": "1", "z": "5"}]"#)
            .unwrap();

        let err = load_students(&system, Path::new("/empty.json"), LoadPolicy::Strict)
            .unwrap_err();
        assert!(matches!(roster_error(&err), RosterError::Validation { .. }));
        assert!(err.to_string().contains("Path '/0/name'"));
    }

    #[test]
    fn advisory_load_warns_about_empty_name() {
        let system = MockSystem::new()
            .with_file("/empty.json", br#"[{"name": "", "number": "1", "z": "5"}]"#)
            .unwrap();

        let report =
            load_students(&system, Path::new("/empty.json"), LoadPolicy::Advisory).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "/0/name");
        assert_eq!(report.students.len(), 1);
    }

    #[test]
    fn advisory_load_adopts_records_and_reports_violations() {
        let system = MockSystem::new()
            .with_file(
                "/partial.json",
                r#"[{"name": "A", "number": "1"}, {"name": "B", "number": "2", "z": "2 2"}]"#
                    .as_bytes(),
            )
            .unwrap();

        let report =
            load_students(&system, Path::new("/partial.json"), LoadPolicy::Advisory).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("\"z\""));
        assert_eq!(report.students.len(), 2);
        assert_eq!(report.students[0].grades, "");
        assert_eq!(report.students[1].grades, "2 2");
    }

    #[test]
    fn advisory_load_still_rejects_non_array_document() {
        let system = MockSystem::new()
            .with_file("/object.json", br#"{"name": "A", "number": "1", "z": "5"}"#)
            .unwrap();

        let err = load_students(&system, Path::new("/object.json"), LoadPolicy::Advisory)
            .unwrap_err();
        assert!(matches!(roster_error(&err), RosterError::Validation { .. }));
    }

    #[test]
    fn load_keeps_file_order() {
        let system = MockSystem::new()
            .with_file(
                "/unsorted.json",
                r#"[{"name": "Zeta", "number": "1", "z": "5"}, {"name": "Alpha", "number": "1", "z": "4"}]"#
                    .as_bytes(),
            )
            .unwrap();

        let report =
            load_students(&system, Path::new("/unsorted.json"), LoadPolicy::Strict).unwrap();
        let names: Vec<&str> = report.students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }
}
