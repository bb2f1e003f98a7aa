//! Offline bundles of solved tables for the trainer.
pub mod binary;
pub use binary::*;

pub mod bundle;
pub use bundle::*;

use crate::cards::CanonicalKey;
use crate::paytable::Paytable;
use crate::strategy::Record;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// name of the compact table the trainer bundles, e.g. `strategy_jacks_or_better_9_6.vpstrat`
pub fn binary_name(paytable: &str) -> String {
    format!("strategy_{}.vpstrat", paytable.replace('-', "_"))
}

/// write `<id>.json` and, if asked, the compact table into a directory
pub fn write(dir: &Path, paytable: &Paytable, records: &[Record], binary: bool) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let mut written = Vec::new();
    let json = dir.join(format!("{}.json", paytable.id));
    std::fs::write(&json, Bundle::from((paytable, records)).to_json()?)
        .with_context(|| format!("write {}", json.display()))?;
    written.push(json);
    if binary {
        let path = dir.join(binary_name(&paytable.id));
        std::fs::write(&path, Vpstrat::from(records).encode()?)
            .with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// entries where a written `.vpstrat` disagrees with its JSON bundle
pub fn compare(bundle: &Bundle, table: &Vpstrat) -> Vec<String> {
    let mut problems = bundle
        .strategies
        .iter()
        .filter_map(|(key, entry)| match CanonicalKey::try_from(key.as_str()) {
            Err(e) => Some(e),
            Ok(parsed) => match table.find(&parsed) {
                None => Some(format!("{} missing from binary table", key)),
                Some((hold, ev)) if u8::from(hold) != entry.hold || ev != entry.ev as f32 => {
                    Some(format!("{} holds {} ({}) in binary, {} ({}) in json", key, hold, ev, entry.hold, entry.ev))
                }
                Some(_) => None,
            },
        })
        .collect::<Vec<_>>();
    if table.len() != bundle.strategies.len() {
        problems.push(format!(
            "binary table has {} entries, json bundle {}",
            table.len(),
            bundle.strategies.len()
        ));
    }
    problems
}

/// read back both files `write` produced for a paytable and compare them
pub fn check(dir: &Path, paytable: &Paytable) -> anyhow::Result<Vec<String>> {
    let json = dir.join(format!("{}.json", paytable.id));
    let json = std::fs::read_to_string(&json).with_context(|| format!("read {}", json.display()))?;
    let path = dir.join(binary_name(&paytable.id));
    let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    Ok(compare(&Bundle::from_json(&json)?, &Vpstrat::decode(&bytes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paytable::Catalog;
    use crate::strategy::Hold;

    #[test]
    fn trainer_file_names() {
        let paytable = Catalog::default().get("double-double-bonus-9-6").unwrap();
        let record = Record {
            paytable: paytable.id.clone(),
            key: CanonicalKey::try_from("TaJaQaKaAa").unwrap(),
            hold: Hold::ALL,
            ev: 800.,
            evs: [0.; crate::N_HOLDS],
        };
        let dir = std::env::temp_dir().join(format!("vpsolver-export-{}", std::process::id()));
        let written = write(&dir, &paytable, &[record], true).unwrap();
        let names = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["double-double-bonus-9-6.json", "strategy_double_double_bonus_9_6.vpstrat"]
        );
        let bytes = std::fs::read(&written[1]).unwrap();
        assert_eq!(Vpstrat::decode(&bytes).unwrap().len(), 1);
        assert!(check(&dir, &paytable).unwrap().is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn binary_disagreeing_with_bundle() {
        let paytable = Catalog::default().get("jacks-or-better-9-6").unwrap();
        let record = |key: &str, hold: u8, ev: f64| Record {
            paytable: paytable.id.clone(),
            key: CanonicalKey::try_from(key).unwrap(),
            hold: Hold::try_from(hold).unwrap(),
            ev,
            evs: [0.; crate::N_HOLDS],
        };
        let json = vec![record("TaJaQaKaAa", 31, 800.), record("2a5b7aJcKb", 8, 0.5)];
        let bundle = Bundle::from((paytable.as_ref(), json.as_slice()));
        assert!(compare(&bundle, &Vpstrat::from(json.as_slice())).is_empty());
        let binary = vec![record("TaJaQaKaAa", 0, 800.)];
        let problems = compare(&bundle, &Vpstrat::from(binary.as_slice()));
        assert_eq!(problems.len(), 3);
        assert!(problems.iter().any(|p| p.starts_with("2a5b7aJcKb missing")));
        assert!(problems.iter().any(|p| p.starts_with("TaJaQaKaAa holds 0")));
    }
}
