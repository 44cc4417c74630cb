//! Print the event stream of both engines for a square with a centre point.
//!
//! Usage:
//!   cargo run -p hullscan --example walkthrough
//!   cargo run -p hullscan --example walkthrough -- screen

use hullscan::prelude::*;

fn main() {
    let frame = std::env::args()
        .nth(1)
        .map(|s| s.parse::<Frame>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("usage: walkthrough [cartesian|screen] ({e})");
            std::process::exit(2);
        })
        .unwrap_or_default();
    let raw = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
        Point::new(2.0, 2.0),
        Point::new(3.0, 1.0),
    ];
    let points = match label_by_polar_order(&raw, frame) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("labelling failed: {e}");
            return;
        }
    };
    for alg in Algorithm::ALL {
        println!("== {alg} ({frame})");
        let mut log = |ev: &HullEvent| match ev {
            HullEvent::AnchorSelected(p) => println!("  anchor   {p}"),
            HullEvent::VertexAccepted(p) => println!("  accept   {p}"),
            HullEvent::VertexRejected(p) => println!("  reject   {p}"),
            HullEvent::HullComplete(v) => {
                let names: Vec<String> = v.iter().map(|p| p.to_string()).collect();
                println!("  hull     [{}]", names.join(", "));
            }
        };
        match alg.engine(HullCfg { frame }).compute_with(&points, Some(&mut log)) {
            Ok(h) => println!("  kind={} area={:.1}", h.kind, h.signed_area()),
            Err(e) => println!("  error: {e}"),
        }
    }
}
