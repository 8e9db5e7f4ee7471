#[cfg(test)]
mod verify {
    use catalogue::language::*;
    use catalogue::parsing::{
        normalize_location, parse_meeting_time, parse_section_code, parse_section_row,
    };

    #[test]
    fn section_codes() {
        assert_eq!(
            parse_section_code("CHEM10171-03"),
            Some(SectionCode {
                department: "CHEM".to_string(),
                course: 10171,
                section: 3,
            })
        );

        for label in ["AME30314-01", "THEO 10001 - 22", "FTT20705  -  1"] {
            let code = parse_section_code(label).unwrap_or_else(|| panic!("{}", label));
            assert!(!code
                .department
                .is_empty());
        }

        for label in ["CHEM-03", "10171-03", "CHEM10171", "- 03"] {
            assert_eq!(parse_section_code(label), None, "{}", label);
        }
    }

    #[test]
    fn meeting_times() {
        let meeting = parse_meeting_time("MWF 09:00-09:50AM").unwrap();
        let days: Vec<u32> = meeting
            .days
            .iter()
            .map(|day| day.index())
            .collect();
        assert_eq!(days, vec![0, 2, 4]);
        assert_eq!((meeting.start, meeting.end), (900, 950));

        let meeting = parse_meeting_time("TR 02:00-03:15PM").unwrap();
        assert_eq!(meeting.days, vec![Weekday::Tuesday, Weekday::Thursday]);
        assert_eq!((meeting.start, meeting.end), (1400, 1515));

        let meeting = parse_meeting_time("MWF 12:00-12:50PM").unwrap();
        assert_eq!((meeting.start, meeting.end), (1200, 1250));

        assert_eq!(parse_meeting_time("TBA"), None);
        assert_eq!(parse_meeting_time("MWF 09:00-09:50"), None);
    }

    #[test]
    fn locations() {
        assert_eq!(
            normalize_location("  Room 101 \n\n  Main Bldg  \n"),
            "Room 101, Main Bldg"
        );
        assert_eq!(normalize_location("\n \n"), "");
    }

    #[test]
    fn section_rows() {
        let mut cells = vec![""; 14];
        cells[0] = "\n  CHEM 10171 - 03\n  View Books\n";
        cells[1] = " General Chemistry ";
        cells[7] = "21834";
        cells[9] = "Smith, Jane";
        cells[10] = "TR - 2:00P - 3:15P\n01/19 - 05/05";
        cells[13] = "\n  Stepan Chemistry\n  Room 125\n";

        let section = parse_section_row(&cells).unwrap();
        assert_eq!(section.department(), "CHEM");
        assert_eq!(section.code.section, 3);
        assert_eq!(section.title, "General Chemistry");
        assert_eq!(section.crn, 21834);
        assert_eq!(section.meeting.start, 1400);
        assert_eq!(section.location, "Stepan Chemistry, Room 125");

        cells[10] = "TBA";
        assert_eq!(parse_section_row(&cells), None);
    }
}
