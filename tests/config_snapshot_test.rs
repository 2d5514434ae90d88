use std::thread;

use blockfall::core::{ConfigSnapshot, GameConfig};
use blockfall::types::PieceKind;

#[test]
fn standard_config_is_valid() {
    GameConfig::standard()
        .validate()
        .expect("shipped tables must satisfy their invariants");
}

#[test]
fn snapshot_json_shape() {
    let json = ConfigSnapshot::standard().to_json_pretty().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).expect("snapshot must be valid json");

    let pieces = v["pieces"].as_array().unwrap();
    assert_eq!(pieces.len(), 7);
    for (piece, kind) in pieces.iter().zip(PieceKind::ALL) {
        assert_eq!(piece["kind"], kind.as_str());
        assert_eq!(piece["color"], kind.color());
        assert_eq!(piece["rotations"].as_array().unwrap().len(), 4);
    }
    assert_eq!(
        pieces[1]["rotations"][3],
        serde_json::json!([[0, 0], [1, 0], [0, 1], [1, 1]])
    );

    assert_eq!(v["spawn"]["x"], 4);
    assert_eq!(v["spawn"]["y"], 1);
    assert_eq!(v["speeds"][0]["level"], 1);
    assert_eq!(v["speeds"][0]["interval_ms"], 1000);
    assert_eq!(v["speeds"][9]["interval_ms"], 150);
    assert_eq!(v["points"]["triple"], 500);
    assert_eq!(v["points"]["hard_drop"], 2);
    assert_eq!(v["lines_per_level"], 10);
}

#[test]
fn concurrent_readers_see_the_same_table() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let cfg = GameConfig::standard();
                let kind = PieceKind::ALL[i % 7];
                (
                    cfg.shape_of(kind).color,
                    cfg.drop_interval_ms(i as u32 + 1).unwrap(),
                    cfg as *const GameConfig as usize,
                )
            })
        })
        .collect();

    let addr = GameConfig::standard() as *const GameConfig as usize;
    for (i, h) in handles.into_iter().enumerate() {
        let (color, ms, seen) = h.join().unwrap();
        assert_eq!(color, PieceKind::ALL[i % 7].color());
        assert_eq!(Ok(ms), GameConfig::standard().drop_interval_ms(i as u32 + 1));
        assert_eq!(seen, addr);
    }
}
