use evolving_pictures::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Runs a few generations with a stand-in for the user: keep the picture with the
// brightest centre pixel and the one with the darkest.

fn brightness(pixels: &[u8], width: u32, height: u32) -> u32 {
    let idx = ((height / 2 * width + width / 2) * 4) as usize;
    pixels[idx..idx + 3].iter().map(|&c| u32::from(c)).sum()
}

fn main() {
    let options = Options {
        width: 64,
        height: 48,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let mut pop = Population::new_random(&mut rng, &options);

    for generation in 0..5 {
        let rendered = render_population(&pop.members, options.width, options.height, options.progress).unwrap();
        let scores: Vec<u32> = rendered
            .iter()
            .map(|px| brightness(px, options.width, options.height))
            .collect();
        let best = (0..scores.len()).max_by_key(|&i| scores[i]).unwrap();
        let worst = (0..scores.len()).min_by_key(|&i| scores[i]).unwrap();
        println!("generation {generation}: keeping {best} (score {}) and {worst} (score {})", scores[best], scores[worst]);

        let mut picked = vec![best];
        if worst != best {
            picked.push(worst);
        }
        pop = pop.next_generation(&picked, &mut rng, &options).unwrap();
    }

    println!("{}", pop.members[0]);
}
