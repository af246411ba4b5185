//! Tests for cases, genders and name parts.

use petrovich::{Case, Gender, NamePart, RuleGender, UnknownCase, compute_suggestions};

// =========================================================================
// Case
// =========================================================================

#[test]
fn case_ordinals_follow_declension_order() {
    assert_eq!(Case::Genitive.index(), 0);
    assert_eq!(Case::Dative.index(), 1);
    assert_eq!(Case::Accusative.index(), 2);
    assert_eq!(Case::Instrumental.index(), 3);
    assert_eq!(Case::Prepositional.index(), 4);

    for (index, case) in Case::ALL.iter().enumerate() {
        assert_eq!(Case::from_index(index), Some(*case));
    }
    assert_eq!(Case::from_index(5), None);
}

#[test]
fn case_try_from_ordinal() {
    assert_eq!(Case::try_from(3_usize).unwrap(), Case::Instrumental);
    let err = Case::try_from(7_usize).unwrap_err();
    assert_eq!(err.name, "7");
}

#[test]
fn case_parses_aliases() {
    assert_eq!("gen".parse::<Case>().unwrap(), Case::Genitive);
    assert_eq!("Dative".parse::<Case>().unwrap(), Case::Dative);
    assert_eq!("винительный".parse::<Case>().unwrap(), Case::Accusative);
    assert_eq!("ТП".parse::<Case>().unwrap(), Case::Instrumental);
    assert_eq!(" prep ".parse::<Case>().unwrap(), Case::Prepositional);
    assert_eq!("4".parse::<Case>().unwrap(), Case::Prepositional);
}

#[test]
fn unknown_case_suggests_close_names() {
    let err = "genitve".parse::<Case>().unwrap_err();
    assert_eq!(err.name, "genitve");
    assert_eq!(err.suggestions, vec!["genitive"]);
    assert!(err.to_string().contains("did you mean: genitive?"));
}

#[test]
fn unknown_case_without_suggestions() {
    let err = "nominative".parse::<Case>().unwrap_err();
    assert_eq!(
        err,
        UnknownCase {
            name: "nominative".to_string(),
            suggestions: Vec::new(),
        }
    );
    assert_eq!(err.to_string(), "unknown case 'nominative'");
}

#[test]
fn case_displays_short_key() {
    let keys: Vec<String> = Case::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["gen", "dat", "acc", "ins", "prep"]);
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    let suggestions = compute_suggestions("item", &available);
    assert_eq!(suggestions.len(), 3);
}

#[test]
fn compute_suggestions_orders_by_distance() {
    let available = vec!["dat".to_string(), "acc".to_string(), "gen".to_string()];
    assert_eq!(compute_suggestions("da", &available), vec!["dat"]);
    assert!(compute_suggestions("xyz", &available).is_empty());
}

// =========================================================================
// Gender
// =========================================================================

#[test]
fn patronymic_in_ich_is_male() {
    assert_eq!(Gender::from_patronymic("Иванович"), Gender::Male);
    assert_eq!(Gender::from_patronymic("Ильич"), Gender::Male);
    assert_eq!(Gender::from_patronymic("ИВАНОВИЧ"), Gender::Male);
}

#[test]
fn patronymic_in_na_is_female() {
    assert_eq!(Gender::from_patronymic("Ивановна"), Gender::Female);
    assert_eq!(Gender::from_patronymic("Ильинична"), Gender::Female);
}

#[test]
fn other_patronymics_are_androgynous() {
    assert_eq!(Gender::from_patronymic("Оглы"), Gender::Androgynous);
    assert_eq!(Gender::from_patronymic("Кызы"), Gender::Androgynous);
    assert_eq!(Gender::from_patronymic(""), Gender::Androgynous);
    assert_eq!(Gender::default(), Gender::Androgynous);
}

#[test]
fn gender_parses_and_displays() {
    assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!(Gender::Androgynous.to_string(), "androgynous");
    assert!("neuter".parse::<Gender>().is_err());
}

#[test]
fn rule_gender_reads_exact_file_values() {
    assert_eq!(
        RuleGender::from_rule_value("androgynous"),
        Some(RuleGender::Any)
    );
    assert_eq!(
        RuleGender::from_rule_value("female"),
        Some(RuleGender::Only(Gender::Female))
    );
    assert_eq!(RuleGender::from_rule_value("M"), None);
    assert_eq!(RuleGender::from_rule_value("m"), None);
    assert_eq!(RuleGender::from_rule_value(" male"), None);
}

#[test]
fn rule_gender_any_accepts_everyone() {
    let any = RuleGender::from(Gender::Androgynous);
    assert_eq!(any, RuleGender::Any);
    assert!(any.accepts(Gender::Male));
    assert!(any.accepts(Gender::Female));
    assert!(any.accepts(Gender::Androgynous));

    let male = RuleGender::from(Gender::Male);
    assert!(male.accepts(Gender::Male));
    assert!(!male.accepts(Gender::Female));
    assert!(!male.accepts(Gender::Androgynous));
}

// =========================================================================
// Name Part
// =========================================================================

#[test]
fn name_part_parses_aliases() {
    assert_eq!("surname".parse::<NamePart>().unwrap(), NamePart::Lastname);
    assert_eq!("имя".parse::<NamePart>().unwrap(), NamePart::Firstname);
    assert_eq!("Patronymic".parse::<NamePart>().unwrap(), NamePart::Middlename);
    assert!("nickname".parse::<NamePart>().is_err());
    assert_eq!(NamePart::Middlename.to_string(), "middlename");
}
