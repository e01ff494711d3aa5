use epipes::{
    emap, ereduce, ereversed, esorted,
    meta::{Filter, Map},
    PipedIter, PipedVec,
};

#[derive(Debug, Clone)]
struct Score {
    player: &'static str,
    points: u32,
}

fn main() -> epipes::Result<()> {
    let scores = vec![
        Score { player: "ada", points: 42 },
        Score { player: "brian", points: 17 },
        Score { player: "grace", points: 42 },
        Score { player: "linus", points: 8 },
    ];

    let by_points = esorted().key(|score: &Score| score.points);

    // ascending then walked backwards: ties keep their reversed insertion order
    let podium: Vec<_> = (scores.clone() | &by_points | ereversed())?
        .take(3)
        .map(|score| score.player)
        .collect();
    println!("podium: {podium:?}");

    let best = scores.clone() | emap(|score: Score| score.points) | ereduce(u32::max);
    println!("best score: {best:?}");

    let qualified = PipedVec::from(scores.clone())
        | (Filter, |score: &Score| score.points >= 10)
        | (Map, |score: Score| score.player);
    println!("qualified: {qualified:?}");

    let mut stream_of_names = PipedIter::new(scores) | (Map, |score: Score| score.player);
    if let Some(first) = stream_of_names.next() {
        println!("first entry: {first}");
    }

    Ok(())
}
