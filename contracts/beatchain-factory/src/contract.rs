use super::*;
use crate::external::TransferParams;

/// Initialize the factory with the minting fee configuration. The init
/// origin becomes the platform owner (first admin).
#[init(contract = "BeatChainFactory", parameter = "PlatformConfig")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let config: PlatformConfig = ctx.parameter_cursor().get()?;
    ensure!(
        config.minting_fee.is_valid(),
        CustomContractError::InvalidRoyalty.into()
    );
    Ok(State::new(state_builder, config, ctx.init_origin()))
}

/// Create a new collection owned by the sender.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Name or symbol is empty.
/// - Sender is a contract.
/// - Fails to log `CollectionCreated` event.
#[receive(
    mutable,
    contract = "BeatChainFactory",
    name = "createCollection",
    parameter = "CreateCollectionParams",
    return_value = "CollectionId",
    enable_logger
)]
fn create_collection<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<CollectionId> {
    let params: CreateCollectionParams = ctx.parameter_cursor().get()?;

    ensure!(
        !params.name.is_empty() && !params.symbol.is_empty(),
        CustomContractError::InvalidName.into()
    );

    let creator = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let (state, state_builder) = host.state_and_builder();
    let id = state.create_collection(
        state_builder,
        creator,
        params.name.clone(),
        params.symbol.clone(),
    );

    logger.log(&FactoryEvent::collection_created(
        id,
        &creator,
        &params.name,
        &params.symbol,
    ))?;

    Ok(id)
}

/// Mint a track token into a collection, collecting the minting fee.
///
/// The minting fee share of the attached payment is transferred to the fee
/// recipient and the remainder is refunded to the invoker; the fee is
/// deducted from the payment, never added on top. The royalty rate supplied
/// here is permanently bound to the token for all future resale
/// settlements, with the invoker as royalty beneficiary.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The attached amount is below the minimum mint price.
/// - The royalty rate is above 100%.
/// - The track duration is zero.
/// - The collection does not exist.
/// - Fails to log `Mint` event.
#[receive(
    mutable,
    payable,
    contract = "BeatChainFactory",
    name = "mintWithFee",
    parameter = "MintParams",
    return_value = "ContractTokenId",
    enable_logger
)]
fn mint_with_fee<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let params: MintParams = ctx.parameter_cursor().get()?;
    let minter = ctx.invoker();

    // Config snapshot for the whole operation.
    let config = host.state().config;

    ensure!(
        amount >= config.minimum_mint_price,
        CustomContractError::InsufficientPayment.into()
    );
    ensure!(
        params.royalty_rate.is_valid(),
        CustomContractError::InvalidRoyalty.into()
    );
    ensure!(
        params.metadata.is_well_formed(),
        CustomContractError::InvalidDuration.into()
    );

    let royalty = Royalty {
        beneficiary: minter,
        rate: params.royalty_rate,
    };

    let token_id = host.state_mut().mint(
        params.collection,
        TokenData {
            owner: params.to,
            uri: params.uri,
            metadata: params.metadata,
            royalty,
        },
    )?;

    let fee = config.minting_fee.of_amount(amount);
    if fee > Amount::zero() {
        host.invoke_transfer(&config.fee_recipient, fee)
            .map_err(CustomContractError::from)?;
    }

    // Remainder of the payment returns to the minter.
    let remainder = amount - fee;
    if remainder > Amount::zero() {
        host.invoke_transfer(&minter, remainder)
            .map_err(CustomContractError::from)?;
    }

    let token = TokenRef {
        collection: params.collection,
        id: token_id,
    };
    logger.log(&FactoryEvent::mint(token, &params.to, &royalty, fee))?;

    Ok(token_id)
}

/// Move token ownership as the terminal effect of a marketplace settlement.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is not the registered marketplace contract.
/// - The token does not exist.
/// - `from` does not currently hold the token.
/// - Fails to log `Transfer` event.
#[receive(
    mutable,
    contract = "BeatChainFactory",
    name = "transfer",
    parameter = "TransferParams",
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: TransferParams = ctx.parameter_cursor().get()?;

    // Only the registered marketplace may move tokens.
    match (ctx.sender(), host.state().marketplace) {
        (Address::Contract(sender), Some(marketplace)) if sender == marketplace => (),
        _ => bail!(CustomContractError::Unauthorized.into()),
    }

    host.state_mut()
        .transfer(&params.token, params.from, params.to)?;

    logger.log(&FactoryEvent::transfer(
        params.token,
        &params.from,
        &params.to,
    ))?;

    Ok(())
}

/// Pure ownership lookup.
#[receive(
    contract = "BeatChainFactory",
    name = "ownerOf",
    parameter = "TokenRef",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token: TokenRef = ctx.parameter_cursor().get()?;
    Ok(host.state().owner_of(&token)?)
}

/// Owner and royalty of a token, read by the marketplace when a listing or
/// auction is created.
#[receive(
    contract = "BeatChainFactory",
    name = "getTokenInfo",
    parameter = "TokenRef",
    return_value = "TokenInfo"
)]
fn get_token_info<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenInfo> {
    let token: TokenRef = ctx.parameter_cursor().get()?;
    Ok(host.state().token_info(&token)?)
}

/// All collection ids in creation order.
#[receive(
    contract = "BeatChainFactory",
    name = "getAllCollections",
    return_value = "Vec<CollectionId>"
)]
fn get_all_collections<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<CollectionId>> {
    Ok(host.state().all_collections())
}

/// Collection ids created by the given account, in creation order.
#[receive(
    contract = "BeatChainFactory",
    name = "getCreatorCollections",
    parameter = "AccountAddress",
    return_value = "Vec<CollectionId>"
)]
fn get_creator_collections<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<CollectionId>> {
    let creator: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().creator_collections(&creator))
}

/// Collection summary for gallery views.
#[receive(
    contract = "BeatChainFactory",
    name = "viewCollection",
    parameter = "CollectionId",
    return_value = "CollectionInfo"
)]
fn view_collection<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<CollectionInfo> {
    let id: CollectionId = ctx.parameter_cursor().get()?;
    Ok(host.state().collection_info(id)?)
}

/// Register the marketplace contract that is allowed to move tokens.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender does not have maintainer rights.
#[receive(
    mutable,
    contract = "BeatChainFactory",
    name = "setMarketplace",
    parameter = "ContractAddress"
)]
fn set_marketplace<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    ensure!(
        host.state().authority.has_maintainer_rights(&ctx.sender()),
        CustomContractError::Unauthorized.into()
    );

    let marketplace: ContractAddress = ctx.parameter_cursor().get()?;
    host.state_mut().marketplace = Some(marketplace);

    Ok(())
}

/// Update one minting configuration value.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender does not have maintainer rights.
/// - A fee rate above 100% is supplied.
#[receive(
    mutable,
    contract = "BeatChainFactory",
    name = "updateConfig",
    parameter = "ConfigValue"
)]
fn update_config<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    ensure!(
        host.state().authority.has_maintainer_rights(&ctx.sender()),
        CustomContractError::Unauthorized.into()
    );

    let value: ConfigValue = ctx.parameter_cursor().get()?;
    let config = &mut host.state_mut().config;

    match value {
        ConfigValue::MinimumMintPrice(price) => config.minimum_mint_price = price,
        ConfigValue::MintingFee(fee) => {
            ensure!(fee.is_valid(), CustomContractError::InvalidRoyalty.into());
            config.minting_fee = fee;
        }
        ConfigValue::FeeRecipient(recipient) => config.fee_recipient = recipient,
    }

    Ok(())
}

/// View one minting configuration value.
#[receive(
    contract = "BeatChainFactory",
    name = "viewConfig",
    parameter = "ConfigKey",
    return_value = "ConfigValue"
)]
fn view_config<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ConfigValue> {
    let key: ConfigKey = ctx.parameter_cursor().get()?;
    let config = &host.state().config;

    let value = match key {
        ConfigKey::MinimumMintPrice => ConfigValue::MinimumMintPrice(config.minimum_mint_price),
        ConfigKey::MintingFee => ConfigValue::MintingFee(config.minting_fee),
        ConfigKey::FeeRecipient => ConfigValue::FeeRecipient(config.fee_recipient),
    };

    Ok(value)
}

/// Function to manage addresses that are allowed to maintain and modify the
/// state of the contract.
///
/// It rejects if:
/// - Fails to parse `AuthorityUpdateParams` parameters.
/// - If sender is neither one of the admins nor one of the maintainers.
#[receive(
    mutable,
    contract = "BeatChainFactory",
    name = "updateAuthority",
    parameter = "AuthorityUpdateParams"
)]
fn update_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<()> {
    let params: AuthorityUpdateParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    host.state_mut().authority.handle_update(sender, params)
}

/// Function to view addresses that are allowed to maintain and modify the
/// state of the contract.
#[receive(
    contract = "BeatChainFactory",
    name = "viewAuthority",
    parameter = "AuthorityViewParams",
    return_value = "Vec<Address>"
)]
fn view_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<Address>> {
    let params: AuthorityViewParams = ctx.parameter_cursor().get()?;
    Ok(host.state().authority.handle_view(params))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0u8; 32]);
    const CREATOR: AccountAddress = AccountAddress([1u8; 32]);
    const COLLECTOR: AccountAddress = AccountAddress([2u8; 32]);
    const OUTSIDER: AccountAddress = AccountAddress([3u8; 32]);
    const FEE_RECIPIENT: AccountAddress = AccountAddress([9u8; 32]);
    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const OTHER_CONTRACT: ContractAddress = ContractAddress {
        index: 8,
        subindex: 0,
    };

    fn default_config() -> PlatformConfig {
        PlatformConfig {
            minimum_mint_price: Amount::from_micro_ccd(10_000),
            minting_fee: BasisPoints::new(250),
            fee_recipient: FEE_RECIPIENT,
        }
    }

    fn track() -> TrackMetadata {
        TrackMetadata {
            title: "Neon Skyline".into(),
            artist: "DJ Ada".into(),
            genre: "Synthwave".into(),
            duration_seconds: 184,
            audio_url: "ipfs://QmAudio/neon-skyline".into(),
            cover_art: "ipfs://QmCover/neon-skyline".into(),
            created_at: Timestamp::from_timestamp_millis(1_700_000_000_000),
            ai_generated: true,
        }
    }

    fn new_host() -> TestHost<State<TestStateApi>> {
        let config = default_config();
        let bytes = to_bytes(&config);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER).set_parameter(&bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = init(&ctx, &mut state_builder).expect_report("Failed to init BeatChainFactory");
        TestHost::new(state, state_builder)
    }

    fn do_create_collection(
        host: &mut TestHost<State<TestStateApi>>,
        creator: AccountAddress,
        name: &str,
        symbol: &str,
    ) -> ContractResult<CollectionId> {
        let params = CreateCollectionParams {
            name: name.into(),
            symbol: symbol.into(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(creator)).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        create_collection(&ctx, host, &mut logger)
    }

    fn do_mint(
        host: &mut TestHost<State<TestStateApi>>,
        minter: AccountAddress,
        to: Address,
        collection: CollectionId,
        royalty_rate: u16,
        paid: Amount,
    ) -> ContractResult<ContractTokenId> {
        let params = MintParams {
            collection,
            to,
            uri: "ipfs://QmToken/metadata".into(),
            metadata: track(),
            royalty_rate: BasisPoints::new(royalty_rate),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(minter))
            .set_invoker(minter)
            .set_parameter(&bytes);

        host.set_self_balance(paid);
        let mut logger = TestLogger::init();
        mint_with_fee(&ctx, host, paid, &mut logger)
    }

    fn register_marketplace(host: &mut TestHost<State<TestStateApi>>) {
        let bytes = to_bytes(&MARKETPLACE);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        set_marketplace(&ctx, host).expect_report("Failed to set marketplace");
    }

    fn do_transfer(
        host: &mut TestHost<State<TestStateApi>>,
        sender: ContractAddress,
        token: TokenRef,
        from: Address,
        to: Address,
    ) -> ContractResult<()> {
        let params = TransferParams { token, from, to };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(sender)).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        transfer(&ctx, host, &mut logger)
    }

    #[concordium_test]
    fn test_init_empty() {
        let host = new_host();
        claim_eq!(host.state().all_collections().len(), 0);
        claim_eq!(host.state().config.minting_fee, BasisPoints::new(250));
        claim_eq!(host.state().marketplace, None);
    }

    #[concordium_test]
    fn test_create_collection_assigns_sequential_ids() {
        let mut host = new_host();

        let first = do_create_collection(&mut host, CREATOR, "BeatChain Genesis", "BEATGEN")
            .expect_report("First collection failed");
        let second = do_create_collection(&mut host, COLLECTOR, "Night Drive", "NIGHT")
            .expect_report("Second collection failed");

        claim_eq!(first, 1);
        claim_eq!(second, 2);
        claim_eq!(host.state().all_collections(), vec![1, 2]);
        claim_eq!(host.state().creator_collections(&CREATOR), vec![1]);
        claim_eq!(host.state().creator_collections(&COLLECTOR), vec![2]);
    }

    #[concordium_test]
    fn test_create_collection_duplicate_names_get_distinct_ids() {
        let mut host = new_host();

        let first = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("First failed");
        let second = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("Second failed");

        claim!(first != second);
        claim_eq!(host.state().creator_collections(&CREATOR), vec![first, second]);
    }

    #[concordium_test]
    fn test_create_collection_rejects_empty_name() {
        let mut host = new_host();

        let result = do_create_collection(&mut host, CREATOR, "", "BEAT");
        claim_eq!(result, Err(CustomContractError::InvalidName.into()));

        let result = do_create_collection(&mut host, CREATOR, "BeatChain Genesis", "");
        claim_eq!(result, Err(CustomContractError::InvalidName.into()));
    }

    #[concordium_test]
    fn test_mint_assigns_owner_and_routes_fee() {
        let mut host = new_host();
        let collection =
            do_create_collection(&mut host, CREATOR, "BeatChain Genesis", "BEATGEN")
                .expect_report("Collection failed");

        // Pay exactly the minimum: 0.01 CCD with a 2.5% minting fee.
        let token_id = do_mint(
            &mut host,
            CREATOR,
            Address::Account(CREATOR),
            collection,
            500,
            Amount::from_micro_ccd(10_000),
        )
        .expect_report("Mint failed");

        claim_eq!(token_id, TokenIdU32(1));

        let token = TokenRef {
            collection,
            id: token_id,
        };
        let info = host
            .state()
            .token_info(&token)
            .expect_report("Token missing");
        claim_eq!(info.owner, Address::Account(CREATOR));
        claim_eq!(info.royalty.beneficiary, CREATOR);
        claim_eq!(info.royalty.rate, BasisPoints::new(500));

        // 0.00025 CCD to the platform, 0.00975 CCD back to the minter.
        claim!(host.transfer_occurred(&FEE_RECIPIENT, Amount::from_micro_ccd(250)));
        claim!(host.transfer_occurred(&CREATOR, Amount::from_micro_ccd(9_750)));
    }

    #[concordium_test]
    fn test_mint_ids_are_sequential_per_collection() {
        let mut host = new_host();
        let first_collection = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("Collection failed");
        let second_collection = do_create_collection(&mut host, CREATOR, "Drops", "DROP")
            .expect_report("Collection failed");

        let paid = Amount::from_micro_ccd(10_000);
        let to = Address::Account(CREATOR);
        let a = do_mint(&mut host, CREATOR, to, first_collection, 0, paid)
            .expect_report("Mint failed");
        let b = do_mint(&mut host, CREATOR, to, first_collection, 0, paid)
            .expect_report("Mint failed");
        let c = do_mint(&mut host, CREATOR, to, second_collection, 0, paid)
            .expect_report("Mint failed");

        claim_eq!(a, TokenIdU32(1));
        claim_eq!(b, TokenIdU32(2));
        // Each collection counts from 1 independently.
        claim_eq!(c, TokenIdU32(1));
    }

    #[concordium_test]
    fn test_mint_rejects_insufficient_payment() {
        let mut host = new_host();
        let collection = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("Collection failed");

        let result = do_mint(
            &mut host,
            CREATOR,
            Address::Account(CREATOR),
            collection,
            500,
            Amount::from_micro_ccd(9_999),
        );
        claim_eq!(result, Err(CustomContractError::InsufficientPayment.into()));
    }

    #[concordium_test]
    fn test_mint_rejects_royalty_above_hundred_percent() {
        let mut host = new_host();
        let collection = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("Collection failed");

        let result = do_mint(
            &mut host,
            CREATOR,
            Address::Account(CREATOR),
            collection,
            10_001,
            Amount::from_micro_ccd(10_000),
        );
        claim_eq!(result, Err(CustomContractError::InvalidRoyalty.into()));
    }

    #[concordium_test]
    fn test_mint_rejects_unknown_collection() {
        let mut host = new_host();

        let result = do_mint(
            &mut host,
            CREATOR,
            Address::Account(CREATOR),
            42,
            0,
            Amount::from_micro_ccd(10_000),
        );
        claim_eq!(result, Err(CustomContractError::UnknownCollection.into()));
    }

    #[concordium_test]
    fn test_transfer_only_by_marketplace() {
        let mut host = new_host();
        let collection = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("Collection failed");
        let token_id = do_mint(
            &mut host,
            CREATOR,
            Address::Account(CREATOR),
            collection,
            0,
            Amount::from_micro_ccd(10_000),
        )
        .expect_report("Mint failed");
        let token = TokenRef {
            collection,
            id: token_id,
        };

        // No marketplace registered yet.
        let result = do_transfer(
            &mut host,
            MARKETPLACE,
            token,
            Address::Account(CREATOR),
            Address::Account(COLLECTOR),
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        register_marketplace(&mut host);

        // A different contract is still rejected.
        let result = do_transfer(
            &mut host,
            OTHER_CONTRACT,
            token,
            Address::Account(CREATOR),
            Address::Account(COLLECTOR),
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        // The registered marketplace moves the token.
        do_transfer(
            &mut host,
            MARKETPLACE,
            token,
            Address::Account(CREATOR),
            Address::Account(COLLECTOR),
        )
        .expect_report("Marketplace transfer failed");
        claim_eq!(
            host.state().owner_of(&token),
            Ok(Address::Account(COLLECTOR))
        );
    }

    #[concordium_test]
    fn test_transfer_rejects_wrong_holder() {
        let mut host = new_host();
        let collection = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("Collection failed");
        let token_id = do_mint(
            &mut host,
            CREATOR,
            Address::Account(CREATOR),
            collection,
            0,
            Amount::from_micro_ccd(10_000),
        )
        .expect_report("Mint failed");
        register_marketplace(&mut host);

        let token = TokenRef {
            collection,
            id: token_id,
        };
        let result = do_transfer(
            &mut host,
            MARKETPLACE,
            token,
            Address::Account(OUTSIDER),
            Address::Account(COLLECTOR),
        );
        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
        claim_eq!(host.state().owner_of(&token), Ok(Address::Account(CREATOR)));
    }

    #[concordium_test]
    fn test_transfer_rejects_unknown_token() {
        let mut host = new_host();
        let collection = do_create_collection(&mut host, CREATOR, "Loops", "LOOP")
            .expect_report("Collection failed");
        register_marketplace(&mut host);

        let token = TokenRef {
            collection,
            id: TokenIdU32(5),
        };
        let result = do_transfer(
            &mut host,
            MARKETPLACE,
            token,
            Address::Account(CREATOR),
            Address::Account(COLLECTOR),
        );
        claim_eq!(result, Err(CustomContractError::UnknownToken.into()));
    }

    #[concordium_test]
    fn test_update_config_is_maintainer_gated() {
        let mut host = new_host();

        let value = ConfigValue::MintingFee(BasisPoints::new(300));
        let bytes = to_bytes(&value);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER)).set_parameter(&bytes);
        let result = update_config(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        update_config(&ctx, &mut host).expect_report("Owner update failed");
        claim_eq!(host.state().config.minting_fee, BasisPoints::new(300));
    }

    #[concordium_test]
    fn test_update_config_rejects_fee_above_hundred_percent() {
        let mut host = new_host();

        let value = ConfigValue::MintingFee(BasisPoints::new(10_001));
        let bytes = to_bytes(&value);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let result = update_config(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::InvalidRoyalty.into()));
    }

    #[concordium_test]
    fn test_view_collection() {
        let mut host = new_host();
        let collection =
            do_create_collection(&mut host, CREATOR, "BeatChain Genesis", "BEATGEN")
                .expect_report("Collection failed");
        do_mint(
            &mut host,
            CREATOR,
            Address::Account(CREATOR),
            collection,
            0,
            Amount::from_micro_ccd(10_000),
        )
        .expect_report("Mint failed");

        let info = host
            .state()
            .collection_info(collection)
            .expect_report("Collection missing");
        claim_eq!(
            info,
            CollectionInfo {
                creator: CREATOR,
                name: "BeatChain Genesis".into(),
                symbol: "BEATGEN".into(),
                tokens: 1,
            }
        );
    }
}
