use ahash::HashMap;
use derive_getters::{Dissolve, Getters};
use derive_more::Display;
use eyre::Result;

use kinmap_core_rs::records::Match;
use kinmap_core_rs::Error;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// Side of the family a group of matches was inherited from.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
pub enum Inheritance {
    #[display("inherited from this parent")]
    Parent,
    #[display("inherited from the other parent")]
    OtherParent,
    #[display("contributed via both parents")]
    BothParents,
}

impl Inheritance {
    pub const ALL: [Inheritance; 3] = [
        Inheritance::Parent,
        Inheritance::OtherParent,
        Inheritance::BothParents,
    ];
}

/// Child's matches split by the side of the family they were inherited from.
#[derive(Clone, PartialEq, Debug, Default, Dissolve, Getters)]
pub struct Phased<'a> {
    parent: Vec<&'a Match>,
    other_parent: Vec<&'a Match>,
    both_parents: Vec<&'a Match>,
}

impl<'a> Phased<'a> {
    pub fn group(&self, inheritance: Inheritance) -> &[&'a Match] {
        match inheritance {
            Inheritance::Parent => &self.parent,
            Inheritance::OtherParent => &self.other_parent,
            Inheritance::BothParents => &self.both_parents,
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = (Inheritance, &[&'a Match])> {
        Inheritance::ALL.into_iter().map(|x| (x, self.group(x)))
    }
}

/// Split the child's matches using the matches of one tested parent.
///
/// Matches missing from the parent's list are attributed to the untested parent. A shared match
/// stays with the tested parent unless the child shares strictly more DNA with it than the
/// parent does, which the parent alone can't explain.
pub fn phase<'a>(child: &'a [Match], parent: &[Match]) -> Result<Phased<'a>> {
    let lookup: HashMap<&str, f64> = parent
        .iter()
        .map(|x| (x.name().as_str(), *x.shared_cm()))
        .collect();

    let (shared, other_parent): (Vec<&Match>, Vec<&Match>) = child
        .iter()
        .partition(|x| lookup.contains_key(x.name().as_str()));

    let mut phased = Phased {
        other_parent,
        ..Default::default()
    };
    for relative in shared {
        // Unreachable while `shared` is partitioned by the same lookup
        let parent_cm = lookup
            .get(relative.name().as_str())
            .ok_or_else(|| Error::Consistency {
                name: relative.name().clone(),
                dataset: "parent",
            })?;

        if relative.shared_cm() > parent_cm {
            phased.both_parents.push(relative);
        } else {
            phased.parent.push(relative);
        }
    }

    log::info!(
        "Phased {} matches: {} from the tested parent, {} from the other parent, {} via both",
        child.len(),
        phased.parent.len(),
        phased.other_parent.len(),
        phased.both_parents.len()
    );
    Ok(phased)
}
