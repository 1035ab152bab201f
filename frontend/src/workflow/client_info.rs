//! Client information draft behind the client info form.

use crate::types::{ClientInfo, ValidationError};

/// Editable form state: business name plus account-number slots.
///
/// There is always at least one slot, even when every slot is blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientInfoDraft {
    name: String,
    slots: Vec<String>,
}

impl Default for ClientInfoDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slots: vec![String::new()],
        }
    }
}

impl ClientInfoDraft {
    /// Pre-populate from a previously submitted [`ClientInfo`].
    pub fn from_info(info: &ClientInfo) -> Self {
        let mut slots = info.account_numbers().to_vec();
        if slots.is_empty() {
            slots.push(String::new());
        }
        Self {
            name: info.name().to_string(),
            slots,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Overwrite one slot. Out-of-range indexes are ignored.
    pub fn set_slot(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_slot(&mut self) {
        self.slots.push(String::new());
    }

    /// Remove a slot, unless it is the last one.
    ///
    /// Returns whether a slot was removed.
    pub fn remove_slot(&mut self, index: usize) -> bool {
        if self.slots.len() <= 1 || index >= self.slots.len() {
            return false;
        }
        self.slots.remove(index);
        true
    }

    /// Whether a slot can currently be removed.
    pub fn can_remove_slot(&self) -> bool {
        self.slots.len() > 1
    }

    /// Inline message for the name field, if any.
    pub fn name_error(&self) -> Option<ValidationError> {
        self.name
            .trim()
            .is_empty()
            .then_some(ValidationError::MissingClientName)
    }

    /// Inline message for the account-number list, if any.
    pub fn accounts_error(&self) -> Option<ValidationError> {
        (!self.slots.iter().any(|slot| !slot.trim().is_empty()))
            .then_some(ValidationError::MissingAccountNumber)
    }

    pub fn is_valid(&self) -> bool {
        self.name_error().is_none() && self.accounts_error().is_none()
    }

    /// Validate the draft into a [`ClientInfo`]. The draft itself is left untouched.
    pub fn submit(&self) -> Result<ClientInfo, ValidationError> {
        ClientInfo::new(&self.name, &self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_blank_slot() {
        let draft = ClientInfoDraft::default();
        assert_eq!(draft.slots(), [String::new()]);
        assert!(!draft.can_remove_slot());
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_last_slot_cannot_be_removed() {
        let mut draft = ClientInfoDraft::default();
        assert!(!draft.remove_slot(0));
        assert_eq!(draft.slots().len(), 1);

        draft.add_slot();
        draft.set_slot(1, "222");
        assert!(draft.remove_slot(0));
        assert_eq!(draft.slots(), ["222".to_string()]);
        assert!(!draft.remove_slot(0));
        assert_eq!(draft.slots().len(), 1);
    }

    #[test]
    fn test_submit_filters_blank_slots() {
        let mut draft = ClientInfoDraft::default();
        draft.set_name("Acme Manufacturing Corp");
        draft.set_slot(0, "");
        draft.add_slot();
        draft.set_slot(1, " ");
        draft.add_slot();
        draft.set_slot(2, "123");

        let info = draft.submit().unwrap();
        assert_eq!(info.name(), "Acme Manufacturing Corp");
        assert_eq!(info.account_numbers(), ["123".to_string()]);
    }

    #[test]
    fn test_submit_rejects_all_blank_accounts() {
        let mut draft = ClientInfoDraft::default();
        draft.set_name("Acme");
        draft.add_slot();
        draft.set_slot(1, "   ");

        assert_eq!(draft.submit(), Err(ValidationError::MissingAccountNumber));
        assert_eq!(
            draft.accounts_error(),
            Some(ValidationError::MissingAccountNumber)
        );
        assert!(draft.name_error().is_none());
    }

    #[test]
    fn test_prepopulates_from_info() {
        let info = ClientInfo::new("TechStart Solutions LLC", ["1122334455", "99"]).unwrap();
        let draft = ClientInfoDraft::from_info(&info);
        assert_eq!(draft.name(), "TechStart Solutions LLC");
        assert_eq!(draft.slots().len(), 2);
        assert!(draft.is_valid());
    }

    #[test]
    fn test_set_slot_out_of_range_is_ignored() {
        let mut draft = ClientInfoDraft::default();
        draft.set_slot(5, "123");
        assert_eq!(draft.slots(), [String::new()]);
    }
}
