//! Family layout
//!
//! Both citation entry points render a family record the same way; they only
//! differ in how the focus child is found and where its enhancement comes
//! from.

use rustc_hash::FxHashSet;

use super::CitationGenerator;
use super::enhancement::Enhancement;
use super::format::{Row, couple_anchor, describe};
use crate::algorithm::identity::IdentityMatcher;
use crate::models::{Couple, Family, Person};
use crate::utils::date_utils::format_date;

/// The child row singled out by a citation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Focus<'a> {
    /// Index of the couple holding the child
    pub couple: usize,
    /// Index of the child within that couple
    pub child: usize,
    /// Adult family to enhance the row from
    pub linked: Option<&'a Family>,
    pub matcher: IdentityMatcher<'a>,
}

/// Which side of a later couple is the new spouse
enum AdditionalSpouse<'a> {
    One(&'a Person),
    Both(&'a Person, &'a Person),
}

/// Position of `person` among the children of `family`
///
/// An identical record wins over an identity match, so a child named after a
/// sibling who died young is not confused with them.
pub(crate) fn locate_child(
    family: &Family,
    person: &Person,
    matcher: &IdentityMatcher<'_>,
) -> Option<(usize, usize)> {
    let positions = || {
        family
            .couples
            .iter()
            .enumerate()
            .flat_map(|(c, couple)| couple.children.iter().enumerate().map(move |(i, child)| (c, i, child)))
    };

    positions()
        .find(|(_, _, child)| *child == person)
        .or_else(|| positions().find(|(_, _, child)| matcher.same_identity(person, child)))
        .map(|(c, i, _)| (c, i))
}

impl CitationGenerator {
    /// Lines of a family citation with an optional focus child
    pub(crate) fn family_lines(&self, family: &Family, focus: Option<&Focus<'_>>) -> Vec<String> {
        let mut lines = vec![format!("{}, {}", family.id, family.page_reference())];
        let Some(primary) = family.primary_couple() else {
            return lines;
        };

        let mut enhanced = None;

        lines.push(format!("Husband: {}", describe(&primary.husband, None)));
        lines.push(format!("Wife: {}", describe(&primary.wife, None)));
        if let Some(date) = primary.marriage_date() {
            lines.push(format!("Married: {}", format_date(date, couple_anchor(primary))));
        }
        if !primary.children.is_empty() {
            lines.push("Children:".to_string());
            lines.extend(self.child_rows(primary, 0, focus, "", &mut enhanced));
        }

        // Widow notes are paired with later couples purely by position.
        let widow_notes: Vec<usize> = family
            .notes
            .iter()
            .enumerate()
            .filter(|(_, note)| self.config.is_widow_note(note))
            .map(|(index, _)| index)
            .collect();
        let mut inline_notes = FxHashSet::default();

        let spouse_matcher = IdentityMatcher::without_equivalences();
        for (offset, couple) in family.additional_couples().iter().enumerate() {
            let index = offset + 1;
            match additional_spouse(primary, couple, &spouse_matcher) {
                AdditionalSpouse::One(spouse) => {
                    lines.push(format!("Additional spouse: {}", describe(spouse, None)));
                }
                AdditionalSpouse::Both(husband, wife) => lines.push(format!(
                    "Additional couple: {} and {}",
                    describe(husband, None),
                    describe(wife, None)
                )),
            }
            if let Some(&note_index) = widow_notes.get(offset) {
                lines.push(format!("  {}", family.notes[note_index].trim()));
                inline_notes.insert(note_index);
            }
            if let Some(date) = couple.marriage_date() {
                lines.push(format!("  Married: {}", format_date(date, couple_anchor(couple))));
            }
            lines.extend(couple.notes.iter().map(|note| format!("  Note: {}", note.trim())));
            if !couple.children.is_empty() {
                lines.push("  Children:".to_string());
                lines.extend(self.child_rows(couple, index, focus, "  ", &mut enhanced));
            }
        }

        let remaining: Vec<&str> = primary
            .notes
            .iter()
            .map(String::as_str)
            .chain(
                family
                    .notes
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| !inline_notes.contains(index))
                    .map(|(_, note)| note.as_str()),
            )
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .collect();
        if !remaining.is_empty() {
            lines.push("Notes:".to_string());
            lines.extend(remaining.iter().map(|note| format!("  {note}")));
        }

        let died_in_infancy: u32 = family.couples.iter().map(|couple| couple.died_in_infancy).sum();
        if died_in_infancy > 0 {
            lines.push(format!("{}: {died_in_infancy}", self.config.infancy_label));
        }

        if !family.footnotes.is_empty() {
            lines.push("Footnotes:".to_string());
            lines.extend(
                family
                    .footnotes
                    .iter()
                    .map(|(marker, text)| format!("  [{marker}] {}", text.trim())),
            );
        }

        if let Some(info) = enhanced {
            lines.extend(info);
        }
        lines
    }

    /// Rows for the children of one couple
    ///
    /// The focus row gets the target marker. When it can be enhanced, the
    /// "Additional Information" lines are handed back through `enhanced`.
    fn child_rows(
        &self,
        couple: &Couple,
        couple_index: usize,
        focus: Option<&Focus<'_>>,
        indent: &str,
        enhanced: &mut Option<Vec<String>>,
    ) -> Vec<String> {
        let anchor = couple_anchor(couple);
        couple
            .children
            .iter()
            .enumerate()
            .map(|(child_index, child)| {
                let focused = focus.filter(|f| f.couple == couple_index && f.child == child_index);
                let Some(focus) = focused else {
                    return format!("{indent}  {}", Row::plain(child, anchor).render());
                };

                let enhancement = focus
                    .linked
                    .and_then(|linked| Enhancement::locate(child, linked, &focus.matcher));
                let row = match enhancement {
                    Some(enhancement) => {
                        let info = enhancement
                            .supplied(child)
                            .lines(child, enhancement.linked(), anchor);
                        if !info.is_empty() {
                            *enhanced = Some(info);
                        }
                        enhancement.row(child, anchor)
                    }
                    None => Row::plain(child, anchor),
                };
                format!("{indent}{} {}", self.config.target_marker, row.render())
            })
            .collect()
    }
}

fn additional_spouse<'a>(
    primary: &Couple,
    couple: &'a Couple,
    matcher: &IdentityMatcher<'_>,
) -> AdditionalSpouse<'a> {
    if matcher.same_identity(&primary.husband, &couple.husband) {
        AdditionalSpouse::One(&couple.wife)
    } else if matcher.same_identity(&primary.wife, &couple.wife) {
        AdditionalSpouse::One(&couple.husband)
    } else {
        AdditionalSpouse::Both(&couple.husband, &couple.wife)
    }
}
