use super::*;

/// Wire shape of the factory `transfer` entrypoint parameter.
#[derive(Serialize)]
struct TransferMessage {
    token: TokenRef,
    from: Address,
    to: Address,
}

/// Read the current owner and the mint-time royalty of a token from the
/// factory registry.
pub fn token_info<T>(
    host: &impl HasHost<T>,
    factory: &ContractAddress,
    token: &TokenRef,
) -> ContractResult<TokenInfo> {
    let mut response = host
        .invoke_contract_read_only(
            factory,
            token,
            EntrypointName::new_unchecked("getTokenInfo"),
            Amount::zero(),
        )
        .map_err(handle_call_error)?
        .ok_or(CustomContractError::Incompatible)?;

    TokenInfo::deserial(&mut response).map_err(|_| CustomContractError::Incompatible.into())
}

/// Move token ownership in the factory registry. Only this contract is
/// trusted by the factory to do so.
pub fn transfer<T>(
    host: &mut impl HasHost<T>,
    factory: &ContractAddress,
    token: TokenRef,
    from: Address,
    to: Address,
) -> ContractResult<()> {
    host.invoke_contract(
        factory,
        &TransferMessage { token, from, to },
        EntrypointName::new_unchecked("transfer"),
        Amount::zero(),
    )
    .map_err(handle_call_error)?;

    Ok(())
}

fn handle_call_error<R>(error: CallContractError<R>) -> ContractError {
    match error {
        CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
            CustomContractError::Incompatible.into()
        }
        CallContractError::LogicReject { .. } => CustomContractError::InvokeContractError.into(),
        e => CustomContractError::from(e).into(),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const FACTORY: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const SELLER: AccountAddress = AccountAddress([1; 32]);
    const BUYER: AccountAddress = AccountAddress([2; 32]);

    fn token() -> TokenRef {
        TokenRef {
            collection: 1,
            id: TokenIdU32(1),
        }
    }

    #[concordium_test]
    fn test_token_info() {
        let state = ();
        let state_builder = TestStateBuilder::default();
        let mut host = TestHost::new(state, state_builder);

        let info = TokenInfo {
            owner: Address::Account(SELLER),
            royalty: Royalty {
                beneficiary: SELLER,
                rate: BasisPoints::new(500),
            },
        };
        let mock_info = info.clone();
        host.setup_mock_entrypoint(
            FACTORY,
            OwnedEntrypointName::new_unchecked("getTokenInfo".into()),
            MockFn::new_v1(move |param, _, _, _| {
                TokenRef::deserial(&mut Cursor::new(param.as_ref()))
                    .map_err(|_| CallContractError::Trap)?;
                Ok((false, mock_info.clone()))
            }),
        );

        let response = token_info(&host, &FACTORY, &token());
        claim_eq!(response, Ok(info));
    }

    #[concordium_test]
    fn test_transfer() {
        let state = ();
        let state_builder = TestStateBuilder::default();
        let mut host = TestHost::new(state, state_builder);

        host.setup_mock_entrypoint(
            FACTORY,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            MockFn::new_v1(|param, _, _, _| {
                TransferMessage::deserial(&mut Cursor::new(param.as_ref()))
                    .map_err(|_| CallContractError::Trap)?;
                Ok((true, ()))
            }),
        );

        let response = transfer(
            &mut host,
            &FACTORY,
            token(),
            Address::Account(SELLER),
            Address::Account(BUYER),
        );
        claim_eq!(response, Ok(()));
    }
}
