use crate::EXPORT_VERSION;
use crate::Utility;
use crate::paytable::Paytable;
use crate::strategy::Record;
use std::collections::BTreeMap;

/// Offline JSON bundle of one paytable's full strategy table.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Bundle {
    pub game: String,
    pub paytable_id: String,
    pub version: u16,
    pub hand_count: usize,
    pub strategies: BTreeMap<String, Entry>,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub hold: u8,
    pub ev: Utility,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hold_evs: BTreeMap<u8, Utility>,
}

impl From<(&Paytable, &[Record])> for Bundle {
    fn from((paytable, records): (&Paytable, &[Record])) -> Self {
        let strategies = records
            .iter()
            .map(|r| {
                let entry = Entry {
                    hold: u8::from(r.hold),
                    ev: r.ev,
                    hold_evs: (0u8..).zip(r.evs).collect(),
                };
                (r.key.to_string(), entry)
            })
            .collect::<BTreeMap<_, _>>();
        Self {
            game: paytable.name.clone(),
            paytable_id: paytable.id.clone(),
            version: EXPORT_VERSION,
            hand_count: strategies.len(),
            strategies,
        }
    }
}

impl Bundle {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CanonicalKey;
    use crate::paytable::Catalog;
    use crate::strategy::Hold;

    #[test]
    fn shape() {
        let paytable = Catalog::default().get("jacks-or-better-9-6").unwrap();
        let record = Record {
            paytable: paytable.id.clone(),
            key: CanonicalKey::try_from("2a5b7aJcKb").unwrap(),
            hold: Hold::try_from(3).unwrap(),
            ev: 1.5,
            evs: std::array::from_fn(|i| i as f64),
        };
        let bundle = Bundle::from((paytable.as_ref(), [record].as_slice()));
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["game"], "Jacks or Better 9/6");
        assert_eq!(json["paytable_id"], "jacks-or-better-9-6");
        assert_eq!(json["hand_count"], 1);
        assert_eq!(json["strategies"]["2a5b7aJcKb"]["hold"], 3);
        assert_eq!(json["strategies"]["2a5b7aJcKb"]["hold_evs"]["31"], 31.);
        let parsed = Bundle::from_json(&bundle.to_json().unwrap()).unwrap();
        assert_eq!(parsed, bundle);
    }
}
