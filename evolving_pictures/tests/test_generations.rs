mod common;

use common::*;
use evolving_pictures::prelude::*;

#[test]
fn three_generations_of_interactive_selection() {
    let opts = quick_options();
    let mut rng = rng(2024);
    let mut pop = Population::new_random(&mut rng, &opts);

    for generation in 0..3 {
        let pixels = render_population(&pop.members, opts.width, opts.height, opts.progress).unwrap();
        assert_eq!(pixels.len(), opts.population_size);
        for buf in &pixels {
            assert_eq!(buf.len(), (opts.width * opts.height * 4) as usize);
            assert!(buf.chunks(4).all(|px| px[3] == 255));
        }

        // Pretend the user liked the first and the last picture.
        let picked = [0, pop.len() - 1];
        pop = pop.next_generation(&picked, &mut rng, &opts).unwrap();
        assert_eq!(pop.len(), opts.population_size, "generation {generation}");
    }
}

#[test]
fn saved_pictures_reload_identically() {
    let opts = quick_options();
    let mut rng = rng(77);
    let ind = Individual::new_random(&mut rng, &opts);
    let text = ind.to_string();
    assert!(text.starts_with("( picture\n"));

    // Once written, a picture's text and pixels are fixed.
    let loaded: Individual = text.parse().unwrap();
    assert_eq!(loaded.to_string(), text);
    let reloaded: Individual = loaded.to_string().parse().unwrap();
    let a = render_rgba(&loaded, opts.width, opts.height).unwrap();
    let b = render_rgba(&reloaded, opts.width, opts.height).unwrap();
    assert_eq!(a, b);
}

#[test]
fn picture_tree_round_trip() {
    let ind: Individual = "( picture\n( + x y )\n( sin ( * x 3.000000000 ) )\n-0.500000000 )".parse().unwrap();
    let tree = ind.to_picture_tree();
    assert_eq!(string_tree(&tree), ind.to_string());
    let again = Individual::from_picture_tree(&tree).unwrap();
    assert_eq!(again.to_string(), ind.to_string());
    assert_eq!(ind.eval(0.5, 0.25).unwrap(), [0.75, (1.5f32).sin(), -0.5]);
}

#[test]
fn evaluating_the_container_fails() {
    let ind: Individual = "( picture x y x )".parse().unwrap();
    let tree = ind.to_picture_tree();
    assert!(matches!(evaluate(&tree, 0.0, 0.0), Err(EvalError::EvalOnContainer { .. })));
}

#[test]
fn mutation_is_reproducible_from_a_seed() {
    let opts = quick_options();
    let base = Individual::new_random(&mut rng(1), &opts);
    let run = |seed| {
        let mut ind = base.clone();
        let mut r = rng(seed);
        for _ in 0..5 {
            ind.mutate(&mut r, &opts);
        }
        ind.to_string()
    };
    assert_eq!(run(9), run(9));
}
