use cvflex::document::{
    Education, Experience, Language, Proficiency, Resume, Section, Skill, resume_outline,
    search_resume,
};

fn test_resume() -> Resume {
    let mut resume = Resume::default();
    resume.personal_info.first_name = "Ada".to_string();
    resume.personal_info.summary = "Analyst with a taste for poetical science.".to_string();
    resume.experience.push(Experience {
        company: "Analytical Engines Ltd".to_string(),
        position: "Programmer".to_string(),
        description: "Published the first algorithm intended for a machine.".to_string(),
        ..Default::default()
    });
    resume.education.push(Education {
        institution: "Home tutoring".to_string(),
        degree: "Mathematics".to_string(),
        ..Default::default()
    });
    resume.skills.push(Skill {
        name: "Analysis".to_string(),
        level: 100,
    });
    resume.languages.push(Language {
        name: "French".to_string(),
        level: Proficiency::Fluent,
    });
    resume
}

mod search_tests {
    use super::*;

    #[test]
    fn test_empty_search_returns_no_results() {
        let resume = test_resume();

        let results = search_resume(&resume, "");
        assert!(results.is_empty(), "Empty search should return no results");

        let results = search_resume(&resume, "   ");
        assert!(results.is_empty(), "Whitespace-only search should return no results");
    }

    #[test]
    fn test_normal_search_returns_results() {
        let resume = test_resume();

        let results = search_resume(&resume, "algorithm");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].section, Some(Section::Experience));
    }

    #[test]
    fn test_case_insensitive_search() {
        let resume = test_resume();

        let lower = search_resume(&resume, "analy");
        let upper = search_resume(&resume, "ANALY");
        let mixed = search_resume(&resume, "Analy");

        assert_eq!(lower.len(), upper.len(), "Search should be case insensitive");
        assert_eq!(lower.len(), mixed.len(), "Search should be case insensitive");
        assert!(!lower.is_empty());
    }

    #[test]
    fn test_search_covers_personal_info() {
        let resume = test_resume();

        let results = search_resume(&resume, "poetical");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].section, None, "Personal info matches carry no section");
    }

    #[test]
    fn test_search_result_positions() {
        let resume = test_resume();

        let results = search_resume(&resume, "algorithm");
        let result = &results[0];
        assert!(result.start_pos < result.end_pos);
        assert_eq!(result.end_pos - result.start_pos, "algorithm".len());
    }

    #[test]
    fn test_search_empty_resume() {
        let results = search_resume(&Resume::default(), "anything");
        assert!(results.is_empty());
    }
}

mod outline_tests {
    use super::*;

    #[test]
    fn test_outline_lists_nonempty_sections_in_display_order() {
        let resume = test_resume();
        let outline = resume_outline(&resume);

        let sections: Vec<Section> = outline.iter().map(|item| item.section).collect();
        assert_eq!(
            sections,
            vec![
                Section::Experience,
                Section::Education,
                Section::Skills,
                Section::Languages
            ]
        );
    }

    #[test]
    fn test_outline_counts_entries() {
        let mut resume = test_resume();
        resume.skills.push(Skill {
            name: "Poetry".to_string(),
            level: 60,
        });

        let outline = resume_outline(&resume);
        let skills = outline
            .iter()
            .find(|item| item.section == Section::Skills)
            .unwrap();
        assert_eq!(skills.entry_count, 2);
        assert_eq!(skills.title, "Skills");
    }

    #[test]
    fn test_outline_of_empty_resume_is_empty() {
        assert!(resume_outline(&Resume::default()).is_empty());
    }
}
