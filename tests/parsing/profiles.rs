#[cfg(test)]
mod verify {
    use std::path::Path;

    use catalogue::language::ProfilerSample;
    use catalogue::parsing::{self, parse_profile_line};
    use catalogue::profile::Profile;

    #[test]
    fn data_and_header_lines() {
        assert_eq!(
            parse_profile_line(
                "  12.50     1.20     0.80      100     8.00     0.01  sectionConflictsWithSchedule(...)"
            ),
            Some(ProfilerSample {
                percent: 12.50,
                total_seconds: 1.20,
                self_seconds: 0.80,
                calls: 100.0,
                name: "sectionConflictsWithSchedule(...)".to_string(),
            })
        );

        assert_eq!(
            parse_profile_line("  %   cumulative   self              self     total"),
            None
        );
    }

    #[test]
    fn sample_report() {
        let content = parsing::load(Path::new("tests/samples/flat_profile.txt"))
            .expect("Failed to load sample profile");

        let profile = Profile::from_text(&content);
        assert_eq!(profile.len(), 5);

        let top: Vec<&str> = profile
            .top_functions(3)
            .iter()
            .map(|sample| sample.name.as_str())
            .collect();
        assert_eq!(
            top,
            vec![
                "Interval::overlaps(Interval const&) const",
                "EventScheduler::sectionConflictsWithSchedule(Event const&)",
                "SharedVector<Interval>::operator[](unsigned long)",
            ]
        );

        let sample = profile
            .function("sectionConflictsWithSchedule")
            .unwrap();
        assert_eq!(sample.calls, 1000.0);
        assert_eq!(sample.total_seconds, 0.08);

        assert!(profile
            .function("frame_dummy")
            .is_none());
    }
}
