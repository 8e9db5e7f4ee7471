#[cfg(test)]
mod verify {
    use std::path::Path;

    use catalogue::aggregate::{convert_courses, Variant};
    use catalogue::language::*;
    use catalogue::output;
    use catalogue::search::{self, Cache, SearchSettings, Snapshot};

    fn snapshot() -> Snapshot {
        Snapshot::load(Path::new("tests/samples/snapshot.json")).expect("Failed to load snapshot")
    }

    #[test]
    fn scanning_every_subject() {
        let source = snapshot();
        let cache = Cache::new();

        let sections = search::all_sections(&source, &cache, &SearchSettings::default()).unwrap();

        let crns: Vec<u64> = sections
            .iter()
            .map(|section| section.crn)
            .collect();
        assert_eq!(crns, vec![21834, 21835, 22010]);
    }

    #[test]
    fn building_the_catalogue() {
        let source = snapshot();
        let cache = Cache::new();

        let sections = search::all_sections(&source, &cache, &SearchSettings::default()).unwrap();
        let subjects = cache
            .subjects(&source)
            .unwrap();
        let courses = convert_courses(&sections, subjects, Variant::Tagged);

        assert_eq!(courses.len(), 2);

        let chemistry = &courses[0];
        assert_eq!(chemistry.id, 110171);
        assert_eq!(chemistry.name, "General Chemistry: Fundamentals");
        assert_eq!(
            chemistry.times,
            vec![
                vec![[540, 590], [3420, 3470], [6300, 6350]],
                vec![[2280, 2355], [5160, 5235]],
            ]
        );

        let tags = chemistry
            .tags
            .as_ref()
            .unwrap();
        assert_eq!(tags.values(Tag::Instructor), ["Smith, Jane", "Lee, Sam"]);
        assert_eq!(tags.values(Tag::Crn), ["21834", "21835"]);
        assert_eq!(
            tags.values(Tag::Location),
            ["Jordan Hall 101", "Stepan Chemistry, Room 125"]
        );
        assert_eq!(tags.values(Tag::Section), ["1", "2"]);

        let mathematics = &courses[1];
        assert_eq!(mathematics.id, 220550);
        assert_eq!(mathematics.times, vec![vec![[660, 735], [3540, 3615]]]);

        for course in &courses {
            let tags = course
                .tags
                .as_ref()
                .unwrap();
            for tag in Tag::ALL {
                assert_eq!(
                    tags.values(tag)
                        .len(),
                    course
                        .times
                        .len(),
                    "{} of course {}",
                    tag.name(),
                    course.id
                );
            }
        }
    }

    #[test]
    fn unknown_term() {
        let source = snapshot();
        let cache = Cache::new();
        let settings = SearchSettings {
            term: "Summer Session 2021".to_string(),
            ..SearchSettings::default()
        };

        assert_eq!(
            search::all_sections(&source, &cache, &settings),
            Err(SearchError::MissingOption {
                field: "TERM",
                label: "Summer Session 2021".to_string(),
            })
        );
    }

    #[test]
    fn writing_the_catalogue() {
        let source = snapshot();
        let cache = Cache::new();

        let sections = search::all_sections(&source, &cache, &SearchSettings::default()).unwrap();
        let subjects = cache
            .subjects(&source)
            .unwrap();
        let courses = convert_courses(&sections, subjects, Variant::Plain);

        let target = std::env::temp_dir().join(format!("catalogue-{}.json", std::process::id()));
        output::write_catalogue(&target, &courses).unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        std::fs::remove_file(&target).ok();

        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        let array = value
            .as_array()
            .unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["id"], 110171);
        assert_eq!(array[1]["name"], "Calculus III");
        assert!(array[0]
            .get("tags")
            .is_none());
    }
}
