// demos/standings.rs
// Scoreboard for a small snapshot, then a surplus split for a three-way deal.
// Run: cargo run --example standings

use std::collections::BTreeMap;

use sidcon_economy::state::{colony_bid_order, standings};
use sidcon_economy::systems::surplus::split_trade_surplus;
use sidcon_economy::{Bundle, GameState, favor_adjusted_cost, is_on_favor_buff};

const SNAPSHOT: &str = r#"{
  "room_name": "demo",
  "favor_buff": true,
  "players": [
    { "user_id": "ana", "specie": "Zeth",   "storage": { "Score": 4, "Energy": 3, "Favor": 1 }, "colony_bid": 2, "tie_breaker": 1 },
    { "user_id": "bo",  "specie": "Yengii", "storage": { "Score": 5, "Food": 2 },               "colony_bid": 1, "tie_breaker": 2 },
    { "user_id": "cy",  "specie": "Caylion","storage": { "Score": 3, "Hypertech": 2 },          "colony_bid": 4, "tie_breaker": 3 }
  ]
}"#;

fn bundle(entries: &[(&str, f64)]) -> Bundle {
    entries.iter().map(|(k, q)| (k.to_string(), *q)).collect()
}

fn main() -> sidcon_economy::Result<()> {
    let state = GameState::from_json(SNAPSHOT)?;

    println!("standings:");
    for (id, score) in standings(&state) {
        let buff = if is_on_favor_buff(&state, id) { " (favor)" } else { "" };
        println!("  {id:>4}  {score:6.2}{buff}");
    }
    println!("colony pick order: {:?}", colony_bid_order(&state));
    println!(
        "ana pays {} Energy for a 3-Energy upgrade",
        favor_adjusted_cost(&state, "ana", "Energy", 3.0)
    );

    let holdings = BTreeMap::from([
        ("ana".to_string(), bundle(&[("Energy", 2.0)])),
        ("bo".to_string(), bundle(&[("Food", 3.0)])),
        ("cy".to_string(), bundle(&[("Hypertech", 1.0)])),
    ]);
    // pooled together they run a converter worth 12
    let shares = split_trade_surplus(&holdings, 12.0);
    println!("surplus split: {shares:?}");
    Ok(())
}
