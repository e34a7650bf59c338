use uuid::Uuid;

use crate::domain::{errors::DomainError, models::Memo};

/// Ownership capability check applied before mutating operations.
pub fn require_owner(requester_id: Uuid, memo: &Memo) -> Result<(), DomainError> {
    if memo.owner_id != requester_id {
        return Err(DomainError::Forbidden(format!(
            "memo {} does not belong to user {}",
            memo.id, requester_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::require_owner;
    use crate::domain::{errors::DomainError, models::Memo};

    fn memo_owned_by(owner_id: Uuid) -> Memo {
        Memo {
            id: Uuid::new_v4(),
            title: "title".into(),
            content: "content".into(),
            owner_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn owner_passes() {
        let owner = Uuid::new_v4();
        assert!(require_owner(owner, &memo_owned_by(owner)).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let memo = memo_owned_by(Uuid::new_v4());
        let err = require_owner(Uuid::new_v4(), &memo).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }
}
