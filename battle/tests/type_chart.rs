use encounter_battle::{category_for, multiplier_for, Effectiveness, Type, MULTIPLIERS};

fn defenders() -> Vec<Option<Type>> {
    std::iter::once(None)
        .chain(Type::all().iter().copied().map(Some))
        .collect()
}

#[test]
fn test_every_pair_classifies() {
    for attacker in Type::all() {
        for defender in defenders() {
            let multiplier = multiplier_for(*attacker, defender);
            assert!(MULTIPLIERS.contains(&multiplier));
            assert!(category_for(multiplier).is_ok());
        }
    }
}

#[test]
fn test_every_dual_typing_classifies() {
    for attacker in Type::all() {
        for primary in Type::all() {
            for secondary in defenders() {
                let multiplier = attacker.effectiveness_dual(*primary, secondary);
                assert!(
                    category_for(multiplier).is_ok(),
                    "{attacker} vs {primary}/{secondary:?} = {multiplier}"
                );
            }
        }
    }
}

#[test]
fn test_water_and_fire_are_not_symmetric() {
    assert_eq!(multiplier_for(Type::Water, Some(Type::Fire)), 2.0);
    assert_eq!(multiplier_for(Type::Fire, Some(Type::Water)), 0.5);
}

#[test]
fn test_reference_scenarios() {
    let thunder_into_ground = multiplier_for(Type::Electric, Some(Type::Ground));
    assert_eq!(category_for(thunder_into_ground), Ok(Effectiveness::NoEffect));

    let chop_into_normal = multiplier_for(Type::Fighting, Some(Type::Normal));
    assert_eq!(chop_into_normal, 2.0);
    assert_eq!(category_for(chop_into_normal), Ok(Effectiveness::SuperEffective));
}

#[test]
fn test_table_is_shareable_across_threads() {
    let handles: Vec<_> = Type::all()
        .iter()
        .copied()
        .map(|attacker| {
            std::thread::spawn(move || {
                Type::all()
                    .iter()
                    .map(|d| multiplier_for(attacker, Some(*d)))
                    .sum::<f32>()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap() > 0.0);
    }
}
