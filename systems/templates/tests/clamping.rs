use proptest::prelude::*;
use stepgate_core::{StepParameter, TemplateCatalog, TemplateKind};
use stepgate_system_templates::{generate_atomic, generate_step};

proptest! {
    #[test]
    fn atomic_parameters_stay_within_bounds(target in -1_000.0f64..10_000.0) {
        let catalog = TemplateCatalog::standard();
        for descriptor in catalog.iter().filter(|descriptor| descriptor.is_atomic()) {
            let step = generate_atomic(&catalog, descriptor.id().as_str(), target)
                .expect("atomic template materialises");
            match (descriptor.kind(), step.parameter()) {
                (TemplateKind::Timer(rule), StepParameter::Timer { duration }) => {
                    prop_assert!(*duration >= rule.min_seconds());
                    prop_assert!(*duration <= rule.max_seconds());
                    prop_assert_eq!(duration % rule.step_seconds(), 0);
                }
                (TemplateKind::Click(rule), StepParameter::Click { target }) => {
                    prop_assert!(*target >= rule.min_clicks());
                    prop_assert!(*target <= rule.max_clicks());
                }
                (kind, parameter) => {
                    prop_assert!(false, "mismatched {kind:?} and {parameter:?}");
                }
            }
        }
    }

    #[test]
    fn composite_estimate_is_exact_sum(target in 0.0f64..1_000.0) {
        let catalog = TemplateCatalog::standard();
        for descriptor in catalog.iter().filter(|descriptor| !descriptor.is_atomic()) {
            let step = generate_step(&catalog, descriptor.id().as_str(), target)
                .expect("composite template materialises");
            let children = step.children();
            prop_assert_eq!(children.len(), 2);
            let sum = children[0].estimated_time() + children[1].estimated_time();
            prop_assert_eq!(step.estimated_time(), sum);
        }
    }
}

#[test]
fn timer_then_click_splits_sixty_forty() {
    let catalog = TemplateCatalog::standard();
    let step = generate_step(&catalog, "timer_then_click", 100.0).expect("composite");
    let children = step.children();

    assert_eq!(children[0].subtype().as_str(), "timer_simple");
    assert_eq!(children[0].parameter(), &StepParameter::Timer { duration: 60 });
    assert_eq!(children[1].subtype().as_str(), "click_simple");
    assert_eq!(children[1].parameter(), &StepParameter::Click { target: 15 });
    assert!((step.estimated_time() - 63.0).abs() < f64::EPSILON);
}
