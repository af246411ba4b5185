//! Integration tests for full-name declension.

use std::sync::Arc;
use std::thread;

use petrovich::{Case, InflectError, RuleTable};

fn rules() -> RuleTable {
    RuleTable::from_json_str(include_str!("fixtures/rules.json")).unwrap()
}

// =========================================================================
// Long Form
// =========================================================================

#[test]
fn male_full_name_genitive() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Иванов Иван Иванович", Case::Genitive, false)
            .unwrap(),
        "Иванова Ивана Ивановича"
    );
}

#[test]
fn female_full_name_genitive() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Иванова Анна Ивановна", Case::Genitive, false)
            .unwrap(),
        "Ивановой Анны Ивановны"
    );
}

#[test]
fn female_adjectival_surname_accusative() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Достоевская Анна Григорьевна", Case::Accusative, false)
            .unwrap(),
        "Достоевскую Анну Григорьевну"
    );
}

#[test]
fn exceptions_apply_inside_full_names() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Толстой Лев Николаевич", Case::Instrumental, false)
            .unwrap(),
        "Толстым Львом Николаевичем"
    );
    assert_eq!(
        rules
            .inflect_full("Дюма Пётр Павлович", Case::Dative, false)
            .unwrap(),
        "Дюма Петру Павловичу"
    );
}

#[test]
fn compound_surname_declines_each_part() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Салтыков-Щедрин Михаил Евграфович", Case::Prepositional, false)
            .unwrap(),
        "Салтыкове-Щедрине Михаиле Евграфовиче"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("  Иванов Иван Иванович \n", Case::Dative, false)
            .unwrap(),
        "Иванову Ивану Ивановичу"
    );
}

#[test]
fn declension_full_lists_every_case() {
    let rules = rules();
    let forms = rules
        .declension_full("Иванов Иван Иванович", false)
        .unwrap();
    insta::assert_snapshot!(forms.join("\n"), @r"
    Иванова Ивана Ивановича
    Иванову Ивану Ивановичу
    Иванова Ивана Ивановича
    Ивановым Иваном Ивановичем
    Иванове Иване Ивановиче
    ");
}

// =========================================================================
// Short Form
// =========================================================================

#[test]
fn short_form_declines_surname_and_keeps_initials() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Иванов Иван Иванович", Case::Genitive, true)
            .unwrap(),
        "Иванова И.И."
    );
    assert_eq!(
        rules
            .inflect_full("Толстой Лев Николаевич", Case::Dative, true)
            .unwrap(),
        "Толстому Л.Н."
    );
}

#[test]
fn short_form_without_matching_rules_keeps_surname() {
    let rules = RuleTable::default();
    assert_eq!(
        rules
            .inflect_full("Иванов Иван Иванович", Case::Genitive, true)
            .unwrap(),
        "Иванов И.И."
    );
}

#[test]
fn short_form_initials_are_whole_characters() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Ким Ёжи Эдуардович", Case::Genitive, true)
            .unwrap(),
        "Кима Ё.Э."
    );
}

// =========================================================================
// Rejected Input
// =========================================================================

#[test]
fn two_parts_are_rejected() {
    let rules = rules();
    let err = rules
        .inflect_full("Иванов Иван", Case::Genitive, false)
        .unwrap_err();
    assert_eq!(
        err,
        InflectError::Format {
            input: "Иванов Иван".to_string(),
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn four_parts_are_rejected() {
    let rules = rules();
    let err = rules
        .inflect_full("Иванов Иван Иванович Младший", Case::Genitive, true)
        .unwrap_err();
    assert!(matches!(
        err,
        InflectError::Format {
            expected: 3,
            found: 4,
            ..
        }
    ));
}

#[test]
fn rejection_does_not_depend_on_case() {
    let rules = rules();
    for case in Case::ALL {
        assert!(rules.inflect_full("Иванов", case, false).is_err());
    }
}

#[test]
fn doubled_space_keeps_an_empty_part_in_long_form() {
    let rules = rules();
    assert_eq!(
        rules
            .inflect_full("Иванов  Иванович", Case::Genitive, false)
            .unwrap(),
        "Иванова  Ивановича"
    );
}

#[test]
fn doubled_space_has_no_initial_in_short_form() {
    let rules = rules();
    let err = rules
        .inflect_full("Иванов  Иванович", Case::Genitive, true)
        .unwrap_err();
    assert_eq!(
        err,
        InflectError::EmptyPart {
            input: "Иванов  Иванович".to_string(),
            position: 1,
        }
    );
}

// =========================================================================
// Sharing
// =========================================================================

#[test]
fn one_table_serves_many_threads() {
    let shared = Arc::new(rules());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let rules = Arc::clone(&shared);
            thread::spawn(move || {
                let case = Case::ALL[i % 5];
                rules
                    .inflect_full("Иванова Анна Ивановна", case, false)
                    .unwrap()
            })
        })
        .collect();

    let expected_rules = rules();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = expected_rules
            .inflect_full("Иванова Анна Ивановна", Case::ALL[i % 5], false)
            .unwrap();
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn scoped_threads_borrow_the_table() {
    let rules = rules();
    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = Case::ALL
            .iter()
            .map(|&case| {
                let rules = &rules;
                scope.spawn(move || rules.inflect_full("Цой Виктор Робертович", case, false))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    assert_eq!(
        results,
        vec![
            "Цоя Виктора Робертовича",
            "Цою Виктору Робертовичу",
            "Цоя Виктора Робертовича",
            "Цоем Виктором Робертовичем",
            "Цое Викторе Робертовиче",
        ]
    );
}
