use super::*;

/// Administrative rights management. The platform owner (init origin) is the
/// first admin; admins manage both lists, maintainers only the maintainer
/// list. All fee and recipient configuration is maintainer-gated.
#[derive(Debug, Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Authority<S: HasStateApi> {
    /// Trusted addresses that may update both admin and maintainer lists.
    admins: StateSet<Address, S>,
    /// Addresses that may maintain contract configuration.
    maintainers: StateSet<Address, S>,
}

impl<S: HasStateApi> Authority<S> {
    pub fn new(state_builder: &mut StateBuilder<S>, owner: Address) -> Self {
        let mut admins = state_builder.new_set();
        admins.insert(owner);
        Self {
            admins,
            maintainers: state_builder.new_set(),
        }
    }

    pub fn has_admin_rights(&self, address: &Address) -> bool {
        self.admins.contains(address)
    }

    pub fn has_maintainer_rights(&self, address: &Address) -> bool {
        self.maintainers.contains(address) || self.has_admin_rights(address)
    }

    pub fn handle_update(
        &mut self,
        sender: Address,
        update: AuthorityUpdateParams,
    ) -> Result<(), Reject> {
        let list = match update.field {
            AuthorityField::Maintainer => {
                ensure!(
                    self.has_maintainer_rights(&sender),
                    CustomContractError::Unauthorized.into()
                );
                &mut self.maintainers
            }
            AuthorityField::Admin => {
                ensure!(
                    self.has_admin_rights(&sender),
                    CustomContractError::Unauthorized.into()
                );
                &mut self.admins
            }
        };

        match update.kind {
            AuthorityUpdateKind::Add => {
                list.insert(update.address);
            }
            AuthorityUpdateKind::Remove => {
                list.remove(&update.address);
            }
        }

        Ok(())
    }

    pub fn handle_view(&self, view: AuthorityViewParams) -> Vec<Address> {
        let list = match view.field {
            AuthorityField::Maintainer => &self.maintainers,
            AuthorityField::Admin => &self.admins,
        };

        list.iter()
            .skip(view.skip as usize)
            .take(view.show as usize)
            .map(|a| *a)
            .collect()
    }
}

#[derive(Debug, SchemaType, Serialize)]
pub enum AuthorityField {
    Maintainer,
    Admin,
}

#[derive(Debug, SchemaType, Serialize)]
pub enum AuthorityUpdateKind {
    Remove,
    Add,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityUpdateParams {
    pub field: AuthorityField,
    pub kind: AuthorityUpdateKind,
    pub address: Address,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityViewParams {
    pub field: AuthorityField,
    pub skip: u32,
    pub show: u32,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const MAINTAINER: AccountAddress = AccountAddress([2; 32]);
    const USER: AccountAddress = AccountAddress([3; 32]);

    fn platform_authority() -> Authority<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let mut authority = Authority::new(&mut state_builder, Address::Account(OWNER));
        authority.maintainers.insert(Address::Account(MAINTAINER));
        authority
    }

    #[concordium_test]
    fn test_owner_is_admin_and_maintainer() {
        let authority = platform_authority();
        claim!(authority.has_admin_rights(&Address::Account(OWNER)));
        claim!(authority.has_maintainer_rights(&Address::Account(OWNER)));
        claim!(!authority.has_admin_rights(&Address::Account(MAINTAINER)));
        claim!(authority.has_maintainer_rights(&Address::Account(MAINTAINER)));
    }

    #[concordium_test]
    fn test_admin_adds_maintainer() {
        let mut authority = platform_authority();

        let result = authority.handle_update(
            Address::Account(OWNER),
            AuthorityUpdateParams {
                field: AuthorityField::Maintainer,
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_maintainer_rights(&Address::Account(USER)));
        claim!(!authority.has_admin_rights(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_maintainer_cannot_touch_admin_list() {
        let mut authority = platform_authority();

        let result = authority.handle_update(
            Address::Account(MAINTAINER),
            AuthorityUpdateParams {
                field: AuthorityField::Admin,
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim!(!authority.has_admin_rights(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_outsider_cannot_update() {
        let mut authority = platform_authority();

        let result = authority.handle_update(
            Address::Account(USER),
            AuthorityUpdateParams {
                field: AuthorityField::Maintainer,
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim!(!authority.has_maintainer_rights(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_admin_removes_maintainer() {
        let mut authority = platform_authority();

        let result = authority.handle_update(
            Address::Account(OWNER),
            AuthorityUpdateParams {
                field: AuthorityField::Maintainer,
                kind: AuthorityUpdateKind::Remove,
                address: Address::Account(MAINTAINER),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(!authority.has_maintainer_rights(&Address::Account(MAINTAINER)));
    }
}
