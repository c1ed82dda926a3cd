use super::coordinator::Coordinator;
use super::data::ConditionsModelData;
use super::format::{to_expression, to_presentation_html, to_presentation_string};
use super::model::{ConditionGroup, ConditionNode, Conditional, condition_from};
use crate::error::ConditionError;
use itertools::Itertools;
use tracing::trace;

/// An inclusive index range of sibling conditions to wrap in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDef {
    first: usize,
    last: usize,
}

impl GroupDef {
    pub fn new(first: usize, last: usize) -> Result<Self, ConditionError> {
        if first >= last {
            return Err(ConditionError::InvalidGroupRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    pub fn starts_with(&self, index: usize) -> bool {
        self.first == index
    }

    fn apply_to(&self, conditions: &[ConditionNode]) -> Vec<ConditionNode> {
        conditions[self.first..=self.last].to_vec()
    }
}

/// The editable value of a named condition.
///
/// Keeps two views of the same list: the order and groups the user chose, and
/// the same list with AND runs auto-grouped so AND binds tighter than OR. The
/// second view is what gets rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionsModel {
    name: Option<String>,
    user_grouped: Vec<ConditionNode>,
    grouped: Vec<ConditionNode>,
}

impl ConditionsModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: &ConditionsModelData) -> Result<Self, ConditionError> {
        let user_grouped = data
            .conditions
            .iter()
            .map(condition_from)
            .collect::<Result<Vec<_>, _>>()?;
        let mut model = Self {
            name: Some(data.name.clone()),
            user_grouped,
            grouped: Vec::new(),
        };
        model.regroup()?;
        Ok(model)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    pub fn has_conditions(&self) -> bool {
        !self.user_grouped.is_empty()
    }

    /// Index of the last user-level condition, `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.user_grouped.len().checked_sub(1)
    }

    pub fn as_per_user_groupings(&self) -> &[ConditionNode] {
        &self.user_grouped
    }

    pub fn add(&mut self, condition: ConditionNode) -> Result<&mut Self, ConditionError> {
        check_coordinator(&condition, !self.user_grouped.is_empty())?;
        self.user_grouped.push(condition);
        self.regroup()?;
        Ok(self)
    }

    pub fn replace(
        &mut self,
        index: usize,
        condition: ConditionNode,
    ) -> Result<&mut Self, ConditionError> {
        check_coordinator(&condition, index != 0)?;
        if index >= self.user_grouped.len() {
            return Err(ConditionError::NoSuchCondition(index));
        }
        self.user_grouped[index] = condition;
        self.regroup()?;
        Ok(self)
    }

    /// Drops the conditions at `indexes`. Whatever ends up first loses its coordinator.
    pub fn remove(&mut self, indexes: &[usize]) -> Result<&mut Self, ConditionError> {
        self.user_grouped = std::mem::take(&mut self.user_grouped)
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !indexes.contains(index))
            .map(|(_, condition)| condition)
            .enumerate()
            .map(|(index, condition)| {
                if index == 0 {
                    condition.into_first()
                } else {
                    condition
                }
            })
            .collect();
        self.regroup()?;
        Ok(self)
    }

    /// Wraps each range in a group. Ranges must lie inside the list and must
    /// not overlap; otherwise nothing changes.
    pub fn add_groups(&mut self, group_defs: &[GroupDef]) -> Result<&mut Self, ConditionError> {
        check_group_defs(group_defs, self.user_grouped.len())?;
        self.user_grouped = group(&self.user_grouped, group_defs)?;
        self.regroup()?;
        Ok(self)
    }

    /// Replaces the group at `index` with its members. Non-groups are left alone.
    pub fn split_group(&mut self, index: usize) -> Result<&mut Self, ConditionError> {
        if let Some(ConditionNode::Group(g)) = self.user_grouped.get(index) {
            let members = g.grouped_conditions();
            self.user_grouped.splice(index..=index, members);
            self.regroup()?;
        }
        Ok(self)
    }

    pub fn move_earlier(&mut self, index: usize) -> Result<&mut Self, ConditionError> {
        if index > 0 && index < self.user_grouped.len() {
            self.user_grouped.swap(index - 1, index);
            if index == 1 {
                self.switch_coordinators()?;
            }
            self.regroup()?;
        }
        Ok(self)
    }

    pub fn move_later(&mut self, index: usize) -> Result<&mut Self, ConditionError> {
        if index + 1 < self.user_grouped.len() {
            self.user_grouped.swap(index, index + 1);
            if index == 0 {
                self.switch_coordinators()?;
            }
            self.regroup()?;
        }
        Ok(self)
    }

    /// Hands element 0's coordinator to element 1, after the two changed places.
    pub fn switch_coordinators(&mut self) -> Result<&mut Self, ConditionError> {
        if self.user_grouped.len() > 1 {
            let coordinator = self.user_grouped[0].coordinator();
            self.user_grouped[1].set_coordinator(coordinator);
            self.user_grouped[0].set_coordinator(None);
            self.regroup()?;
        }
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.user_grouped.clear();
        self.grouped.clear();
        self.name = None;
        self
    }

    pub fn to_presentation_string(&self) -> String {
        self.grouped
            .iter()
            .map(|c| to_presentation_string(c))
            .join(" ")
    }

    pub fn to_presentation_html(&self) -> String {
        self.grouped.iter().map(|c| to_presentation_html(c)).join(" ")
    }

    pub fn to_expression(&self) -> String {
        self.grouped.iter().map(|c| to_expression(c)).join(" ")
    }

    /// Serializes the user groupings; auto groups are derived, not stored.
    pub fn to_json(&self) -> ConditionsModelData {
        ConditionsModelData {
            name: self.name.clone().unwrap_or_default(),
            conditions: self.user_grouped.iter().map(ConditionNode::to_json).collect(),
        }
    }

    fn regroup(&mut self) -> Result<(), ConditionError> {
        let corrected = self
            .user_grouped
            .iter()
            .map(|condition| match condition {
                ConditionNode::Group(g) if g.len() > 2 => {
                    let defs = auto_group_defs(g.conditions())?;
                    Ok(ConditionNode::Group(ConditionGroup::new(group(
                        g.conditions(),
                        &defs,
                    )?)?))
                }
                other => Ok(other.clone()),
            })
            .collect::<Result<Vec<_>, ConditionError>>()?;

        let defs = auto_group_defs(&corrected)?;
        trace!(auto_groups = defs.len(), "regrouped conditions");
        self.grouped = group(&corrected, &defs)?;
        Ok(())
    }
}

impl TryFrom<&ConditionsModelData> for ConditionsModel {
    type Error = ConditionError;

    fn try_from(data: &ConditionsModelData) -> Result<Self, Self::Error> {
        ConditionsModel::from_data(data)
    }
}

fn check_coordinator(
    condition: &ConditionNode,
    coordinator_expected: bool,
) -> Result<(), ConditionError> {
    match (condition.coordinator(), coordinator_expected) {
        (Some(_), false) => Err(ConditionError::CoordinatorOnFirst),
        (None, true) => Err(ConditionError::MissingCoordinator),
        _ => Ok(()),
    }
}

fn check_group_defs(group_defs: &[GroupDef], len: usize) -> Result<(), ConditionError> {
    let sorted = group_defs.iter().sorted_by_key(|def| def.first).collect_vec();
    if let Some(def) = sorted.iter().find(|def| def.last >= len) {
        return Err(ConditionError::NoSuchCondition(def.last));
    }
    match sorted
        .iter()
        .tuple_windows()
        .find(|(earlier, later)| later.first <= earlier.last)
    {
        Some((earlier, later)) => Err(ConditionError::OverlappingGroups {
            first: later.first,
            last: earlier.last,
        }),
        None => Ok(()),
    }
}

/// Group ranges that make AND bind tighter than OR in a mixed list.
///
/// The coordinator of element 0 joins the list to whatever precedes it (a
/// group's first member carries the group's coordinator) and is ignored.
fn auto_group_defs(conditions: &[ConditionNode]) -> Result<Vec<GroupDef>, ConditionError> {
    let or_positions: Vec<usize> = conditions
        .iter()
        .positions(|c| c.coordinator() == Some(Coordinator::Or))
        .filter(|&position| position > 0)
        .collect();
    let has_and = conditions
        .iter()
        .skip(1)
        .any(|c| c.coordinator() == Some(Coordinator::And));

    if !has_and || or_positions.is_empty() {
        return Ok(Vec::new());
    }

    let mut defs = Vec::new();
    let mut start = 0;
    for (i, &position) in or_positions.iter().enumerate() {
        if start + 1 < position {
            defs.push(GroupDef::new(start, position - 1)?);
        }
        let is_last_or = i + 1 == or_positions.len();
        if is_last_or && position + 1 < conditions.len() {
            defs.push(GroupDef::new(position, conditions.len() - 1)?);
        }
        start = position;
    }
    Ok(defs)
}

fn group(
    conditions: &[ConditionNode],
    group_defs: &[GroupDef],
) -> Result<Vec<ConditionNode>, ConditionError> {
    let mut grouped = Vec::with_capacity(conditions.len());
    for (index, condition) in conditions.iter().enumerate() {
        match group_defs.iter().find(|def| def.contains(index)) {
            Some(def) if def.starts_with(index) => {
                if def.last >= conditions.len() {
                    return Err(ConditionError::NoSuchCondition(def.last));
                }
                grouped.push(ConditionNode::Group(ConditionGroup::new(
                    def.apply_to(conditions),
                )?));
            }
            Some(_) => {}
            None => grouped.push(condition.clone()),
        }
    }
    Ok(grouped)
}
