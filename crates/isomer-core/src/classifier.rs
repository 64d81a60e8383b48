//! Isomer classification of an assignment against a level target.
//!
//! Pure and deterministic: the same assignment and level always yield the
//! same [`ClassificationResult`]. The composition check runs first; geometry
//! is only inspected once the ligand counts match the level exactly.

use serde::Serialize;

use crate::isomer::IsomerClass;
use crate::layout::{are_antipodal, are_orthogonal, SlotId};
use crate::level::{Composition, LevelConfig};
use crate::ligand::{Assignment, LigandKind};

/// Outcome category of a result, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultKind {
    Success,
    CompositionError,
    Mismatch,
    /// Produced only by "show answer", never by classification.
    Info,
}

impl ResultKind {
    /// Numeric code used on the JS bridge.
    pub fn code(self) -> u32 {
        match self {
            Self::Success => 0,
            Self::CompositionError => 1,
            Self::Mismatch => 2,
            Self::Info => 3,
        }
    }
}

/// What a submit (or "show answer") produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Outcome {
    Success {
        isomer: IsomerClass,
    },
    CompositionError {
        expected: Composition,
        actual: Composition,
    },
    /// `detected` is `None` when the arrangement is not one of the four
    /// classes (a level asking for neither 2 nor 3 halides).
    Mismatch {
        detected: Option<IsomerClass>,
        target: IsomerClass,
    },
    Info {
        isomer: IsomerClass,
    },
}

/// Outcome plus the human-readable feedback line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    #[serde(flatten)]
    pub outcome: Outcome,
    pub message: String,
}

impl ClassificationResult {
    pub fn success(isomer: IsomerClass) -> Self {
        Self {
            message: format!("Correct! You have built the {isomer} isomer."),
            outcome: Outcome::Success { isomer },
        }
    }

    pub fn composition_error(expected: Composition, actual: Composition) -> Self {
        Self {
            message: format!(
                "Incorrect Composition. Need {} Cl and {} NH₃. Currently: {} Cl, {} NH₃.",
                expected.halide, expected.filler, actual.halide, actual.filler
            ),
            outcome: Outcome::CompositionError { expected, actual },
        }
    }

    pub fn mismatch(detected: Option<IsomerClass>, target: IsomerClass) -> Self {
        let detected_tag = detected.map_or("UNKNOWN", IsomerClass::tag);
        Self {
            message: format!(
                "This is the {detected_tag} isomer. Try rearranging the Chlorines to form the {target} isomer."
            ),
            outcome: Outcome::Mismatch { detected, target },
        }
    }

    /// Answer-key result shown alongside a revealed solution.
    pub fn info(isomer: IsomerClass) -> Self {
        Self {
            message: format!("Solution: This is the correct {isomer} configuration."),
            outcome: Outcome::Info { isomer },
        }
    }

    pub fn kind(&self) -> ResultKind {
        match self.outcome {
            Outcome::Success { .. } => ResultKind::Success,
            Outcome::CompositionError { .. } => ResultKind::CompositionError,
            Outcome::Mismatch { .. } => ResultKind::Mismatch,
            Outcome::Info { .. } => ResultKind::Info,
        }
    }

    /// The isomer class this result names, if any: the built class on
    /// success, the detected class on mismatch, the revealed class on info.
    pub fn isomer(&self) -> Option<IsomerClass> {
        match self.outcome {
            Outcome::Success { isomer } | Outcome::Info { isomer } => Some(isomer),
            Outcome::Mismatch { detected, .. } => detected,
            Outcome::CompositionError { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind() == ResultKind::Success
    }
}

/// Classify the geometry of the halide positions alone.
///
/// Two halides: antipodal → TRANS, orthogonal → CIS. Three halides: any
/// antipodal pair → MER, otherwise one slot per axis → FAC. Any other count
/// has no class.
pub fn classify_halides(halides: &[SlotId]) -> Option<IsomerClass> {
    match *halides {
        [a, b] => {
            if are_antipodal(a, b) {
                Some(IsomerClass::Trans)
            } else if are_orthogonal(a, b) {
                Some(IsomerClass::Cis)
            } else {
                None
            }
        }
        [a, b, c] => {
            let pairs = [(a, b), (a, c), (b, c)];
            if pairs.iter().any(|&(x, y)| are_antipodal(x, y)) {
                Some(IsomerClass::Mer)
            } else if pairs.iter().all(|&(x, y)| are_orthogonal(x, y)) {
                Some(IsomerClass::Fac)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Judge an assignment against a level.
pub fn classify(assignment: &Assignment, level: &LevelConfig) -> ClassificationResult {
    let halides = assignment.slots_of(LigandKind::Halide);
    let actual = Composition::new(halides.len(), assignment.count(LigandKind::Filler));
    let expected = level.composition();

    if actual != expected {
        log::debug!("composition mismatch: expected {expected:?}, got {actual:?}");
        return ClassificationResult::composition_error(expected, actual);
    }

    let detected = classify_halides(&halides);
    log::debug!("halides at {halides:?} classified as {detected:?}, target {}", level.target);

    match detected {
        Some(class) if class == level.target => ClassificationResult::success(class),
        _ => ClassificationResult::mismatch(detected, level.target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::slot_axis;

    fn id(i: usize) -> SlotId {
        SlotId::new(i).unwrap()
    }

    fn level(target: IsomerClass, cl: usize, nh3: usize) -> LevelConfig {
        LevelConfig {
            id: 1,
            name: "test".into(),
            description: String::new(),
            formula: String::new(),
            target,
            required_cl: cl,
            required_nh3: nh3,
        }
    }

    /// Halides at `halides`, fillers on every other slot up to `fillers` of them.
    fn arrangement(halides: &[usize], fillers: usize) -> Assignment {
        let mut a = Assignment::new();
        for &h in halides {
            a.place(id(h), LigandKind::Halide);
        }
        for s in SlotId::all().filter(|s| !halides.contains(&s.index())).take(fillers) {
            a.place(s, LigandKind::Filler);
        }
        a
    }

    #[test]
    fn every_pair_is_cis_or_trans() {
        let mut trans = 0;
        let mut cis = 0;
        for a in SlotId::all() {
            for b in SlotId::all().filter(|&b| b > a) {
                let opposite = slot_axis(a) == -slot_axis(b);
                let class = classify_halides(&[a, b]);
                if opposite {
                    assert_eq!(class, Some(IsomerClass::Trans), "pair {a},{b}");
                    trans += 1;
                } else {
                    assert_eq!(class, Some(IsomerClass::Cis), "pair {a},{b}");
                    cis += 1;
                }
            }
        }
        assert_eq!(trans, 3);
        assert_eq!(cis, 12);
    }

    #[test]
    fn eight_fac_and_twelve_mer_triples() {
        let mut fac = 0;
        let mut mer = 0;
        for a in SlotId::all() {
            for b in SlotId::all().filter(|&b| b > a) {
                for c in SlotId::all().filter(|&c| c > b) {
                    let has_antipodal_pair =
                        are_antipodal(a, b) || are_antipodal(a, c) || are_antipodal(b, c);
                    match classify_halides(&[a, b, c]) {
                        Some(IsomerClass::Fac) => {
                            assert!(!has_antipodal_pair);
                            fac += 1;
                        }
                        Some(IsomerClass::Mer) => {
                            assert!(has_antipodal_pair);
                            mer += 1;
                        }
                        other => panic!("triple {a},{b},{c} classified as {other:?}"),
                    }
                }
            }
        }
        assert_eq!(fac, 8);
        assert_eq!(mer, 12);
    }

    #[test]
    fn other_halide_counts_have_no_class() {
        assert_eq!(classify_halides(&[]), None);
        assert_eq!(classify_halides(&[id(0)]), None);
        assert_eq!(classify_halides(&[id(0), id(1), id(2), id(3)]), None);
        // Same slot twice is not a geometry.
        assert_eq!(classify_halides(&[id(2), id(2)]), None);
    }

    #[test]
    fn cis_success() {
        let result = classify(&arrangement(&[0, 2], 4), &level(IsomerClass::Cis, 2, 4));
        assert_eq!(result.kind(), ResultKind::Success);
        assert_eq!(result.isomer(), Some(IsomerClass::Cis));
        assert_eq!(result.message, "Correct! You have built the CIS isomer.");
    }

    #[test]
    fn trans_when_cis_wanted() {
        let result = classify(&arrangement(&[0, 1], 4), &level(IsomerClass::Cis, 2, 4));
        assert_eq!(
            result.outcome,
            Outcome::Mismatch {
                detected: Some(IsomerClass::Trans),
                target: IsomerClass::Cis
            }
        );
        assert_eq!(
            result.message,
            "This is the TRANS isomer. Try rearranging the Chlorines to form the CIS isomer."
        );
    }

    #[test]
    fn fac_success_and_mer_mismatch() {
        let fac_level = level(IsomerClass::Fac, 3, 3);
        let ok = classify(&arrangement(&[0, 2, 4], 3), &fac_level);
        assert_eq!(ok.outcome, Outcome::Success { isomer: IsomerClass::Fac });

        let wrong = classify(&arrangement(&[0, 1, 2], 3), &fac_level);
        assert_eq!(wrong.kind(), ResultKind::Mismatch);
        assert_eq!(wrong.isomer(), Some(IsomerClass::Mer));
    }

    #[test]
    fn composition_checked_before_geometry() {
        // Three mutually orthogonal halides would be FAC, but the level wants two.
        let result = classify(&arrangement(&[0, 2, 4], 3), &level(IsomerClass::Cis, 2, 4));
        assert_eq!(
            result.outcome,
            Outcome::CompositionError {
                expected: Composition::new(2, 4),
                actual: Composition::new(3, 3)
            }
        );
        assert_eq!(result.isomer(), None);
    }

    #[test]
    fn missing_halide_reports_counts() {
        let result = classify(&arrangement(&[0], 4), &level(IsomerClass::Cis, 2, 4));
        assert_eq!(result.kind(), ResultKind::CompositionError);
        assert_eq!(
            result.message,
            "Incorrect Composition. Need 2 Cl and 4 NH₃. Currently: 1 Cl, 4 NH₃."
        );
    }

    #[test]
    fn fillers_must_match_too() {
        let result = classify(&arrangement(&[0, 2], 0), &level(IsomerClass::Cis, 2, 4));
        assert_eq!(
            result.outcome,
            Outcome::CompositionError {
                expected: Composition::new(2, 4),
                actual: Composition::new(2, 0)
            }
        );
    }

    #[test]
    fn unsupported_halide_count_is_always_mismatch() {
        let result = classify(&arrangement(&[0, 1, 2, 3], 2), &level(IsomerClass::Cis, 4, 2));
        assert_eq!(
            result.outcome,
            Outcome::Mismatch { detected: None, target: IsomerClass::Cis }
        );
        assert!(result.message.starts_with("This is the UNKNOWN isomer."));
    }

    #[test]
    fn classification_is_idempotent() {
        let a = arrangement(&[1, 3, 5], 3);
        let l = level(IsomerClass::Mer, 3, 3);
        assert_eq!(classify(&a, &l), classify(&a, &l));
    }

    #[test]
    fn result_json_is_flat_and_tagged() {
        let json = serde_json::to_value(ClassificationResult::success(IsomerClass::Trans)).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["isomer"], "TRANS");
        assert!(json["message"].as_str().unwrap().contains("TRANS"));

        let json = serde_json::to_value(ClassificationResult::composition_error(
            Composition::new(2, 4),
            Composition::new(1, 4),
        ))
        .unwrap();
        assert_eq!(json["type"], "compositionError");
        assert_eq!(json["expected"]["halide"], 2);
        assert_eq!(json["actual"]["halide"], 1);
    }
}
