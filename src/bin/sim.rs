use cube_four::{GameEngine, GameStatus};
use rand::{rngs::SmallRng, seq::IndexedRandom, SeedableRng};
use serde_json::json;

/// Play one match of uniformly random legal moves.
fn random_match(rng: &mut SmallRng) -> anyhow::Result<GameEngine> {
    let mut engine = GameEngine::new();
    while engine.compute_status() == GameStatus::Playing {
        let legal = engine.legal_cells();
        let target = *legal
            .choose(rng)
            .ok_or_else(|| anyhow::anyhow!("no legal move while playing"))?;
        engine
            .try_place(target, None)
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(engine)
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <matches>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let matches: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(matches);
    let (mut red, mut yellow, mut draws) = (0usize, 0usize, 0usize);

    for _ in 0..matches {
        let engine = random_match(&mut rng)?;
        let snapshot = engine.snapshot();
        match snapshot.status {
            GameStatus::RedWon => red += 1,
            GameStatus::YellowWon => yellow += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::Playing => {}
        }
        results.push(json!({
            "status": snapshot.status,
            "moves": snapshot.pieces.len(),
            "winning_lines": snapshot.winning_lines,
        }));
    }

    let summary = json!({
        "seed": seed,
        "red_wins": red,
        "yellow_wins": yellow,
        "draws": draws,
        "matches": results,
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
