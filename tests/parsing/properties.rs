#[cfg(test)]
mod properties {
    use cooklang::conformance::{self, StepToken};
    use cooklang::language::*;
    use cooklang::parsing;

    const INPUTS: &[&str] = &[
        "Add @salt{1%tsp} and @pepper",
        "@green onions{3%stalks}, chopped",
        "Fry #pan{} until ~{10%minutes} pass",
        "Dice @onion{3% and @garlic{2%cloves}",
        "Put @eggs{2} in #pot{} for ~eggs{5%minutes}.\nServe @salt-and-pepper on a #plate.",
        "Pür @sálz{1} in die #Pfanne{} 🍳 ~{2%Minuten}",
        "@a@b#c~d{1}",
        "~{1%min}@salt",
        "Mash @potatoes{1%kg} [- floury -] with #masher -- comment @ignored",
        "email me @ home # 5 ~ ok @{3%g} #{} ~",
    ];

    fn render(tokens: &[StepToken]) -> String {
        let mut result = String::new();
        for token in tokens {
            match token {
                StepToken::Text { value } => result.push_str(value),
                StepToken::Ingredient { name, .. } => result.push_str(name),
                StepToken::Cookware { name, .. } => result.push_str(name),
                StepToken::Timer { name, .. } => result.push_str(
                    name.as_deref()
                        .unwrap_or(""),
                ),
            }
        }
        result
    }

    #[test]
    fn offsets_land_on_names() {
        for input in INPUTS {
            let recipe = parsing::parse(input);
            for step in &recipe.steps {
                for annotation in step.annotations() {
                    let idx = annotation.idx();
                    let name = annotation.name();
                    assert_eq!(
                        &step.directions[idx..idx + name.len()],
                        name,
                        "in {:?}",
                        input
                    );
                }
            }
        }
    }

    #[test]
    fn annotations_in_declaration_order() {
        let recipe = parsing::parse("#bowl{} @flour{200%g} ~{1%min} @sugar #whisk ~rest{5}");

        let names: Vec<&str> = recipe.steps[0]
            .annotations()
            .iter()
            .map(|annotation| annotation.name())
            .collect();
        assert_eq!(names, vec!["bowl", "flour", "", "sugar", "whisk", "rest"]);

        for input in INPUTS {
            let recipe = parsing::parse(input);
            for step in &recipe.steps {
                let offsets: Vec<usize> = step
                    .annotations()
                    .iter()
                    .map(|annotation| annotation.idx())
                    .collect();
                let mut sorted = offsets.clone();
                sorted.sort();
                assert_eq!(offsets, sorted, "in {:?}", input);
            }
        }
    }

    #[test]
    fn named_offsets_strictly_increase() {
        for input in INPUTS {
            let recipe = parsing::parse(input);
            for step in &recipe.steps {
                let offsets: Vec<usize> = step
                    .annotations()
                    .iter()
                    .filter(|annotation| {
                        !annotation
                            .name()
                            .is_empty()
                    })
                    .map(|annotation| annotation.idx())
                    .collect();
                assert!(
                    offsets
                        .windows(2)
                        .all(|pair| pair[0] < pair[1]),
                    "in {:?}",
                    input
                );
            }
        }
    }

    #[test]
    fn tokens_render_back_to_directions() {
        for input in INPUTS {
            let recipe = parsing::parse(input);
            for step in &recipe.steps {
                let tokens = conformance::tokens(step);
                assert_eq!(render(&tokens), step.directions, "in {:?}", input);
            }
        }
    }

    #[test]
    fn no_sigils_left_from_parsed_annotations() {
        let recipe = parsing::parse("Add @salt{1%tsp}, #pan{} and ~{2%min}");
        let directions = &recipe.steps[0].directions;
        assert!(!directions.contains('@'));
        assert!(!directions.contains('#'));
        assert!(!directions.contains('~'));
        assert!(!directions.contains('{'));
        assert!(!directions.contains('}'));
    }

    #[test]
    fn malformed_annotations_stay_literal() {
        let recipe = parsing::parse("email me @ home # 5 ~ ok @{3%g} #{} ~");
        let step = &recipe.steps[0];
        assert_eq!(step.directions, "email me @ home # 5 ~ ok @{3%g} #{} ~");
        assert!(step
            .annotations()
            .is_empty());
    }

    #[test]
    fn concurrent_parsing() {
        let sources: Vec<String> = (0..16)
            .map(|i| format!(">> batch: {}\nAdd @flour{{{}%g}} to #bowl{{}}\n\nWait ~{{{}%minutes}}", i, i * 10, i))
            .collect();

        let results: Vec<(usize, Recipe)> = std::thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .enumerate()
                .map(|(i, source)| scope.spawn(move || (i, parsing::parse(source))))
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        for (i, recipe) in results {
            assert_eq!(recipe.metadata["batch"], i.to_string());
            assert_eq!(recipe.steps.len(), 2);
            assert_eq!(
                recipe.steps[0].ingredients[0]
                    .amount
                    .quantity,
                Quantity::Integer(i as i64 * 10)
            );
            assert_eq!(
                recipe.steps[1].timers[0].duration,
                Quantity::Integer(i as i64)
            );
        }
    }
}
