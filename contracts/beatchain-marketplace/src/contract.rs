use super::*;

/// Initialize the marketplace with no trades.
#[init(contract = "BeatChainMarketplace", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;
    ensure!(
        params.platform_fee.is_valid(),
        CustomContractError::InvalidRoyalty.into()
    );
    Ok(State::new(
        state_builder,
        params.factory,
        params.beneficiary,
        params.platform_fee,
        ctx.init_origin(),
    ))
}

/// Read the token from the factory and check that the would-be seller holds
/// it and that the combined fee rate is settleable. Trades that could not
/// settle are rejected here, settlement itself never fails on rates.
fn checked_token_info<S: HasStateApi>(
    host: &impl HasHost<State<S>, StateApiType = S>,
    seller: AccountAddress,
    token: &TokenRef,
) -> ContractResult<TokenInfo> {
    let factory = host.state().factory;
    let info = nft::token_info(host, &factory, token)?;

    ensure!(
        info.owner == Address::Account(seller),
        CustomContractError::NotOwner.into()
    );
    ensure!(
        host.state()
            .platform_fee
            .checked_add(info.royalty.rate)
            .map_or(false, |total| total.is_valid()),
        CustomContractError::InvalidRoyalty.into()
    );

    Ok(info)
}

/// Pay out one settlement split from the contract balance.
fn settle<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    seller: &AccountAddress,
    royalty: &Royalty,
    split: &FeeSplit,
) -> ContractResult<()> {
    let beneficiary = host.state().beneficiary;

    if split.platform > Amount::zero() {
        host.invoke_transfer(&beneficiary, split.platform)
            .map_err(CustomContractError::from)?;
    }
    if split.royalty > Amount::zero() {
        host.invoke_transfer(&royalty.beneficiary, split.royalty)
            .map_err(CustomContractError::from)?;
    }
    if split.seller > Amount::zero() {
        host.invoke_transfer(seller, split.seller)
            .map_err(CustomContractError::from)?;
    }

    Ok(())
}

/// Put a token on the book at a fixed price. The token stays with the
/// seller, the trade only reserves it against other listings and auctions.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - Price is zero.
/// - Sender does not hold the token in the factory registry.
/// - Platform fee plus token royalty exceeds 100%.
/// - The token is already on an active trade.
/// - Fails to log `ItemListed` event.
#[receive(
    mutable,
    contract = "BeatChainMarketplace",
    name = "listItem",
    parameter = "ListParams",
    return_value = "ListingId",
    enable_logger
)]
fn list_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ListingId> {
    let params: ListParams = ctx.parameter_cursor().get()?;

    let seller = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };
    ensure!(
        params.price > Amount::zero(),
        CustomContractError::InvalidPrice.into()
    );

    let info = checked_token_info(host, seller, &params.token)?;

    let id = host
        .state_mut()
        .list(params.token, seller, params.price, info.royalty)?;

    logger.log(&MarketEvent::listed(id, params.token, &seller, params.price))?;

    Ok(id)
}

/// Buy a listed token. The price is split between platform, royalty
/// beneficiary and seller at the rates snapshotted when the listing was
/// created; any overpayment returns to the buyer. Token ownership moves in
/// the factory registry as the final step.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - The listing does not exist.
/// - The listing is already sold or cancelled.
/// - The attached amount is below the listing price.
/// - Fails to log `ItemSold` event.
#[receive(
    mutable,
    payable,
    contract = "BeatChainMarketplace",
    name = "buyItem",
    parameter = "ListingId",
    enable_logger
)]
fn buy_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let id: ListingId = ctx.parameter_cursor().get()?;

    let buyer = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let listing = host.state_mut().buy(id, amount)?;

    let split = split_proceeds(listing.price, listing.platform_fee, listing.royalty.rate);
    settle(host, &listing.seller, &listing.royalty, &split)?;

    // Return overpayment to the buyer.
    let remaining_funds = amount - listing.price;
    if remaining_funds > Amount::zero() {
        host.invoke_transfer(&buyer, remaining_funds)
            .map_err(CustomContractError::from)?;
    }

    let factory = host.state().factory;
    nft::transfer(
        host,
        &factory,
        listing.token,
        Address::Account(listing.seller),
        Address::Account(buyer),
    )?;

    logger.log(&MarketEvent::sold(
        id,
        listing.token,
        &listing.seller,
        &buyer,
        listing.price,
        split,
    ))?;

    Ok(())
}

/// Take a listing off the book. Only the seller may cancel; the record is
/// kept with a terminal status.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - The listing does not exist.
/// - The listing is already sold or cancelled.
/// - Sender is not the seller.
/// - Fails to log `ItemCancelled` event.
#[receive(
    mutable,
    contract = "BeatChainMarketplace",
    name = "cancelItem",
    parameter = "ListingId",
    enable_logger
)]
fn cancel_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let id: ListingId = ctx.parameter_cursor().get()?;

    let sender = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let listing = host.state_mut().cancel_listing(id, sender)?;

    logger.log(&MarketEvent::cancelled(id, listing.token, &listing.seller))?;

    Ok(())
}

/// Open a timed English auction for a token. The end time is fixed at
/// creation from the current slot time plus the requested duration.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - Starting price is zero.
/// - Duration is zero or overflows the clock.
/// - Sender does not hold the token in the factory registry.
/// - Platform fee plus token royalty exceeds 100%.
/// - The token is already on an active trade.
/// - Fails to log `AuctionCreated` event.
#[receive(
    mutable,
    contract = "BeatChainMarketplace",
    name = "createAuction",
    parameter = "CreateAuctionParams",
    return_value = "AuctionId",
    enable_logger
)]
fn create_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<AuctionId> {
    let params: CreateAuctionParams = ctx.parameter_cursor().get()?;

    let seller = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };
    ensure!(
        params.starting_price > Amount::zero(),
        CustomContractError::InvalidPrice.into()
    );
    ensure!(
        params.duration_seconds > 0,
        CustomContractError::InvalidDuration.into()
    );

    let millis = params
        .duration_seconds
        .checked_mul(1000)
        .ok_or(CustomContractError::InvalidDuration)?;
    let end = ctx
        .metadata()
        .slot_time()
        .checked_add(Duration::from_millis(millis))
        .ok_or(CustomContractError::InvalidDuration)?;

    let info = checked_token_info(host, seller, &params.token)?;

    let id = host.state_mut().create_auction(
        params.token,
        seller,
        params.starting_price,
        end,
        info.royalty,
    )?;

    logger.log(&MarketEvent::auction_created(
        id,
        params.token,
        &seller,
        params.starting_price,
        end,
    ))?;

    Ok(id)
}

/// Bid on an open auction. The attached amount is escrowed by this
/// contract; the escrow it displaces is refunded within the same
/// transaction, so at most one bid per auction is ever held.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - The auction does not exist.
/// - The auction is finalized or past its end time.
/// - Sender is the seller.
/// - The amount is below the starting price, or does not strictly beat the
///   highest bid.
/// - Fails to log `BidPlaced` event.
#[receive(
    mutable,
    payable,
    contract = "BeatChainMarketplace",
    name = "placeBid",
    parameter = "AuctionId",
    enable_logger
)]
fn place_bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let id: AuctionId = ctx.parameter_cursor().get()?;

    let bidder = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let previous_bid =
        host.state_mut()
            .bid(id, bidder, amount, ctx.metadata().slot_time())?;

    logger.log(&MarketEvent::bid(id, &bidder, amount))?;

    // Refund the displaced escrow.
    if let Some(previous) = previous_bid {
        host.invoke_transfer(&previous.bidder, previous.amount)
            .map_err(CustomContractError::from)?;
    }

    Ok(())
}

/// Close an auction past its end time. Anyone may call this; expiry is
/// detected here, not driven by a timer. With a winning bid the escrow is
/// split between platform, royalty beneficiary and seller at the rates
/// snapshotted at creation and the token moves to the winner. Without bids
/// the auction closes with no transfers.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The auction does not exist.
/// - The auction is already finalized.
/// - The end time has not been reached.
/// - Fails to log `AuctionFinalized` event.
#[receive(
    mutable,
    contract = "BeatChainMarketplace",
    name = "finalize",
    parameter = "AuctionId",
    enable_logger
)]
fn finalize<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let id: AuctionId = ctx.parameter_cursor().get()?;

    let auction = host
        .state_mut()
        .finalize(id, ctx.metadata().slot_time())?;

    let split = match auction.highest_bid {
        Some(bid) => {
            let split = split_proceeds(bid.amount, auction.platform_fee, auction.royalty.rate);
            settle(host, &auction.seller, &auction.royalty, &split)?;

            let factory = host.state().factory;
            nft::transfer(
                host,
                &factory,
                auction.token,
                Address::Account(auction.seller),
                Address::Account(bid.bidder),
            )?;

            split
        }
        None => FeeSplit {
            platform: Amount::zero(),
            royalty: Amount::zero(),
            seller: Amount::zero(),
        },
    };

    logger.log(&MarketEvent::finalized(
        id,
        auction.token,
        &auction.seller,
        &auction.highest_bid,
        split,
    ))?;

    Ok(())
}

/// Cancel an auction that received no bids. Once a bid is escrowed the
/// auction is committed and has to run to its end.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - The auction does not exist.
/// - The auction is already finalized.
/// - Sender is not the seller.
/// - A bid has been placed.
/// - Fails to log `AuctionCancelled` event.
#[receive(
    mutable,
    contract = "BeatChainMarketplace",
    name = "cancelAuction",
    parameter = "AuctionId",
    enable_logger
)]
fn cancel_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let id: AuctionId = ctx.parameter_cursor().get()?;

    let sender = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let auction = host.state_mut().cancel_auction(id, sender)?;

    logger.log(&MarketEvent::auction_cancelled(
        id,
        auction.token,
        &auction.seller,
    ))?;

    Ok(())
}

/// Listing record, in whatever state it is in. Ids stay resolvable forever.
#[receive(
    contract = "BeatChainMarketplace",
    name = "viewListing",
    parameter = "ListingId",
    return_value = "Listing"
)]
fn view_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Listing> {
    let id: ListingId = ctx.parameter_cursor().get()?;
    Ok(host.state().listing(id)?)
}

/// Auction record, in whatever state it is in.
#[receive(
    contract = "BeatChainMarketplace",
    name = "viewAuction",
    parameter = "AuctionId",
    return_value = "Auction"
)]
fn view_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Auction> {
    let id: AuctionId = ctx.parameter_cursor().get()?;
    Ok(host.state().auction(id)?)
}

/// Update one marketplace configuration value. Trades already on the book
/// keep the rates they were created with.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender does not have maintainer rights.
/// - A fee rate above 100% is supplied.
#[receive(
    mutable,
    contract = "BeatChainMarketplace",
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
    let state = host.state_mut();

    match value {
        ConfigValue::PlatformFee(fee) => {
            ensure!(fee.is_valid(), CustomContractError::InvalidRoyalty.into());
            state.platform_fee = fee;
        }
        ConfigValue::Beneficiary(beneficiary) => state.beneficiary = beneficiary,
        ConfigValue::Factory(factory) => state.factory = factory,
    }

    Ok(())
}

/// View one marketplace configuration value.
#[receive(
    contract = "BeatChainMarketplace",
    name = "viewConfig",
    parameter = "ConfigKey",
    return_value = "ConfigValue"
)]
fn view_config<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ConfigValue> {
    let key: ConfigKey = ctx.parameter_cursor().get()?;
    let state = host.state();

    let value = match key {
        ConfigKey::PlatformFee => ConfigValue::PlatformFee(state.platform_fee),
        ConfigKey::Beneficiary => ConfigValue::Beneficiary(state.beneficiary),
        ConfigKey::Factory => ConfigValue::Factory(state.factory),
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
    contract = "BeatChainMarketplace",
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
    contract = "BeatChainMarketplace",
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
    const SELLER: AccountAddress = AccountAddress([1u8; 32]);
    const BUYER: AccountAddress = AccountAddress([2u8; 32]);
    const BIDDER_1: AccountAddress = AccountAddress([3u8; 32]);
    const BIDDER_2: AccountAddress = AccountAddress([4u8; 32]);
    const ARTIST: AccountAddress = AccountAddress([5u8; 32]);
    const OUTSIDER: AccountAddress = AccountAddress([6u8; 32]);
    const BENEFICIARY: AccountAddress = AccountAddress([9u8; 32]);
    const FACTORY: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const T0: u64 = 1_700_000_000_000;
    const DAY_SECONDS: u64 = 86_400;
    const DAY_MILLIS: u64 = DAY_SECONDS * 1000;

    fn token() -> TokenRef {
        TokenRef {
            collection: 1,
            id: TokenIdU32(1),
        }
    }

    fn new_host() -> TestHost<State<TestStateApi>> {
        let params = InitParams {
            factory: FACTORY,
            beneficiary: BENEFICIARY,
            platform_fee: BasisPoints::new(250),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER).set_parameter(&bytes);

        let mut state_builder = TestStateBuilder::new();
        let state =
            init(&ctx, &mut state_builder).expect_report("Failed to init BeatChainMarketplace");
        TestHost::new(state, state_builder)
    }

    /// Mock the factory registry: every token is held by `owner` and
    /// carries a royalty for ARTIST at the given rate.
    fn mock_factory_with(
        host: &mut TestHost<State<TestStateApi>>,
        owner: Address,
        royalty_rate: u16,
    ) {
        let info = TokenInfo {
            owner,
            royalty: Royalty {
                beneficiary: ARTIST,
                rate: BasisPoints::new(royalty_rate),
            },
        };
        host.setup_mock_entrypoint(
            FACTORY,
            OwnedEntrypointName::new_unchecked("getTokenInfo".into()),
            commons::test::parse_and_ok_mock::<TokenRef, _>(info),
        );
        host.setup_mock_entrypoint(
            FACTORY,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            commons::test::parse_and_ok_mock::<TokenRef, _>(()),
        );
    }

    fn mock_factory(host: &mut TestHost<State<TestStateApi>>, owner: Address) {
        mock_factory_with(host, owner, 500);
    }

    fn do_list(
        host: &mut TestHost<State<TestStateApi>>,
        seller: AccountAddress,
        token: TokenRef,
        price: Amount,
    ) -> ContractResult<ListingId> {
        let params = ListParams { token, price };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(seller)).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        list_item(&ctx, host, &mut logger)
    }

    fn do_buy(
        host: &mut TestHost<State<TestStateApi>>,
        buyer: AccountAddress,
        listing: ListingId,
        paid: Amount,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&listing);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(buyer)).set_parameter(&bytes);

        host.set_self_balance(paid);
        let mut logger = TestLogger::init();
        buy_item(&ctx, host, paid, &mut logger)
    }

    fn do_cancel_listing(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        listing: ListingId,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&listing);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender)).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        cancel_item(&ctx, host, &mut logger)
    }

    fn do_create_auction(
        host: &mut TestHost<State<TestStateApi>>,
        seller: AccountAddress,
        token: TokenRef,
        starting_price: Amount,
        duration_seconds: u64,
        now: u64,
    ) -> ContractResult<AuctionId> {
        let params = CreateAuctionParams {
            token,
            starting_price,
            duration_seconds,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(seller))
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(now))
            .set_parameter(&bytes);

        let mut logger = TestLogger::init();
        create_auction(&ctx, host, &mut logger)
    }

    fn do_bid(
        host: &mut TestHost<State<TestStateApi>>,
        bidder: AccountAddress,
        auction: AuctionId,
        amount: Amount,
        now: u64,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&auction);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(bidder))
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(now))
            .set_parameter(&bytes);

        host.set_self_balance(Amount::from_ccd(100));
        let mut logger = TestLogger::init();
        place_bid(&ctx, host, amount, &mut logger)
    }

    fn do_finalize(
        host: &mut TestHost<State<TestStateApi>>,
        auction: AuctionId,
        now: u64,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&auction);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER))
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(now))
            .set_parameter(&bytes);

        host.set_self_balance(Amount::from_ccd(100));
        let mut logger = TestLogger::init();
        finalize(&ctx, host, &mut logger)
    }

    fn do_cancel_auction(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        auction: AuctionId,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&auction);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender)).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        cancel_auction(&ctx, host, &mut logger)
    }

    #[concordium_test]
    fn test_init_empty() {
        let host = new_host();
        claim_eq!(host.state().platform_fee, BasisPoints::new(250));
        claim_eq!(host.state().beneficiary, BENEFICIARY);
        claim_eq!(host.state().factory, FACTORY);
        claim_eq!(host.state().next_listing_id, 1);
        claim_eq!(host.state().next_auction_id, 1);
    }

    #[concordium_test]
    fn test_init_rejects_fee_above_hundred_percent() {
        let params = InitParams {
            factory: FACTORY,
            beneficiary: BENEFICIARY,
            platform_fee: BasisPoints::new(10_001),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER).set_parameter(&bytes);

        let mut state_builder = TestStateBuilder::new();
        claim!(init(&ctx, &mut state_builder).is_err());
    }

    #[concordium_test]
    fn test_list_snapshots_fee_and_royalty() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_list(&mut host, SELLER, token(), Amount::from_ccd(1))
            .expect_report("Listing failed");

        claim_eq!(id, 1);
        let listing = host.state().listing(id).expect_report("Listing missing");
        claim_eq!(
            listing,
            Listing {
                token: token(),
                seller: SELLER,
                price: Amount::from_ccd(1),
                platform_fee: BasisPoints::new(250),
                royalty: Royalty {
                    beneficiary: ARTIST,
                    rate: BasisPoints::new(500),
                },
                status: ListingStatus::Active,
            }
        );
        claim_eq!(
            host.state().trade_for(&token()),
            Some(ActiveTrade::Listing(id))
        );
    }

    #[concordium_test]
    fn test_list_rejects_non_owner() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(OUTSIDER));

        let result = do_list(&mut host, SELLER, token(), Amount::from_ccd(1));
        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    #[concordium_test]
    fn test_list_rejects_zero_price() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let result = do_list(&mut host, SELLER, token(), Amount::zero());
        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));
    }

    #[concordium_test]
    fn test_list_rejects_unsettleable_fee_sum() {
        let mut host = new_host();
        // 2.5% platform fee plus 98% royalty cannot settle.
        mock_factory_with(&mut host, Address::Account(SELLER), 9_800);

        let result = do_list(&mut host, SELLER, token(), Amount::from_ccd(1));
        claim_eq!(result, Err(CustomContractError::InvalidRoyalty.into()));
    }

    #[concordium_test]
    fn test_token_is_exclusive_to_one_trade() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        do_list(&mut host, SELLER, token(), Amount::from_ccd(1)).expect_report("Listing failed");

        // Same token cannot be listed or auctioned again.
        let result = do_list(&mut host, SELLER, token(), Amount::from_ccd(2));
        claim_eq!(
            result,
            Err(CustomContractError::AlreadyListedOrAuctioned.into())
        );
        let result = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_ccd(1),
            DAY_SECONDS,
            T0,
        );
        claim_eq!(
            result,
            Err(CustomContractError::AlreadyListedOrAuctioned.into())
        );
    }

    #[concordium_test]
    fn test_auctioned_token_cannot_be_listed() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_ccd(1),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        let result = do_list(&mut host, SELLER, token(), Amount::from_ccd(1));
        claim_eq!(
            result,
            Err(CustomContractError::AlreadyListedOrAuctioned.into())
        );
    }

    #[concordium_test]
    fn test_buy_splits_price_three_ways() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_list(&mut host, SELLER, token(), Amount::from_ccd(1))
            .expect_report("Listing failed");
        do_buy(&mut host, BUYER, id, Amount::from_ccd(1)).expect_report("Buy failed");

        // 1 CCD at 2.5% platform fee and 5% royalty.
        claim!(host.transfer_occurred(&BENEFICIARY, Amount::from_micro_ccd(25_000)));
        claim!(host.transfer_occurred(&ARTIST, Amount::from_micro_ccd(50_000)));
        claim!(host.transfer_occurred(&SELLER, Amount::from_micro_ccd(925_000)));

        let listing = host.state().listing(id).expect_report("Listing missing");
        claim_eq!(listing.status, ListingStatus::Sold);
        claim_eq!(host.state().trade_for(&token()), None);
    }

    #[concordium_test]
    fn test_buy_refunds_overpayment() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_list(&mut host, SELLER, token(), Amount::from_ccd(1))
            .expect_report("Listing failed");
        do_buy(&mut host, BUYER, id, Amount::from_micro_ccd(1_200_000))
            .expect_report("Buy failed");

        claim!(host.transfer_occurred(&BUYER, Amount::from_micro_ccd(200_000)));
    }

    #[concordium_test]
    fn test_buy_rejects_underpayment() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_list(&mut host, SELLER, token(), Amount::from_ccd(1))
            .expect_report("Listing failed");
        let result = do_buy(&mut host, BUYER, id, Amount::from_micro_ccd(999_999));
        claim_eq!(result, Err(CustomContractError::InsufficientPayment.into()));

        let listing = host.state().listing(id).expect_report("Listing missing");
        claim_eq!(listing.status, ListingStatus::Active);
    }

    #[concordium_test]
    fn test_buy_rejects_sold_listing() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_list(&mut host, SELLER, token(), Amount::from_ccd(1))
            .expect_report("Listing failed");
        do_buy(&mut host, BUYER, id, Amount::from_ccd(1)).expect_report("Buy failed");

        let result = do_buy(&mut host, OUTSIDER, id, Amount::from_ccd(1));
        claim_eq!(result, Err(CustomContractError::NotActive.into()));
    }

    #[concordium_test]
    fn test_buy_rejects_unknown_listing() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let result = do_buy(&mut host, BUYER, 42, Amount::from_ccd(1));
        claim_eq!(result, Err(CustomContractError::UnknownListing.into()));
    }

    #[concordium_test]
    fn test_fee_regime_is_snapshotted_at_listing() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_list(&mut host, SELLER, token(), Amount::from_ccd(1))
            .expect_report("Listing failed");

        // Raise the platform fee to 10% after the listing was created.
        let value = ConfigValue::PlatformFee(BasisPoints::new(1_000));
        let bytes = to_bytes(&value);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        update_config(&ctx, &mut host).expect_report("Config update failed");

        do_buy(&mut host, BUYER, id, Amount::from_ccd(1)).expect_report("Buy failed");

        // The settlement still uses the 2.5% snapshot.
        claim!(host.transfer_occurred(&BENEFICIARY, Amount::from_micro_ccd(25_000)));
        claim!(host.transfer_occurred(&SELLER, Amount::from_micro_ccd(925_000)));
    }

    #[concordium_test]
    fn test_cancel_listing() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_list(&mut host, SELLER, token(), Amount::from_ccd(1))
            .expect_report("Listing failed");

        let result = do_cancel_listing(&mut host, OUTSIDER, id);
        claim_eq!(result, Err(CustomContractError::NotSeller.into()));

        do_cancel_listing(&mut host, SELLER, id).expect_report("Cancel failed");
        let listing = host.state().listing(id).expect_report("Listing missing");
        claim_eq!(listing.status, ListingStatus::Cancelled);
        claim_eq!(host.state().trade_for(&token()), None);

        // Terminal records reject a second cancel.
        let result = do_cancel_listing(&mut host, SELLER, id);
        claim_eq!(result, Err(CustomContractError::NotActive.into()));

        // The token is free to trade again and gets a fresh id.
        let second = do_list(&mut host, SELLER, token(), Amount::from_ccd(2))
            .expect_report("Relisting failed");
        claim_eq!(second, 2);
    }

    #[concordium_test]
    fn test_create_auction_fixes_end_time() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        claim_eq!(id, 1);
        let auction = host.state().auction(id).expect_report("Auction missing");
        claim_eq!(
            auction.end,
            Timestamp::from_timestamp_millis(T0 + DAY_MILLIS)
        );
        claim_eq!(auction.status, AuctionStatus::Open);
        claim_eq!(auction.highest_bid, None);
        claim_eq!(auction.platform_fee, BasisPoints::new(250));
        claim_eq!(
            host.state().trade_for(&token()),
            Some(ActiveTrade::Auction(id))
        );
    }

    #[concordium_test]
    fn test_create_auction_rejects_bad_parameters() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let result =
            do_create_auction(&mut host, SELLER, token(), Amount::zero(), DAY_SECONDS, T0);
        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));

        let result = do_create_auction(&mut host, SELLER, token(), Amount::from_ccd(1), 0, T0);
        claim_eq!(result, Err(CustomContractError::InvalidDuration.into()));

        mock_factory(&mut host, Address::Account(OUTSIDER));
        let result = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_ccd(1),
            DAY_SECONDS,
            T0,
        );
        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    #[concordium_test]
    fn test_bid_sequence_with_refund() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        // First bid at the starting price is accepted.
        do_bid(&mut host, BIDDER_1, id, Amount::from_micro_ccd(100_000), T0 + 1)
            .expect_report("First bid failed");

        // A higher bid displaces it and the escrow is refunded.
        do_bid(&mut host, BIDDER_2, id, Amount::from_micro_ccd(200_000), T0 + 2)
            .expect_report("Second bid failed");
        claim!(host.transfer_occurred(&BIDDER_1, Amount::from_micro_ccd(100_000)));

        // A bid between the two is not enough.
        let result = do_bid(&mut host, BIDDER_1, id, Amount::from_micro_ccd(150_000), T0 + 3);
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));

        let auction = host.state().auction(id).expect_report("Auction missing");
        claim_eq!(
            auction.highest_bid,
            Some(Bid {
                bidder: BIDDER_2,
                amount: Amount::from_micro_ccd(200_000),
            })
        );
    }

    #[concordium_test]
    fn test_first_bid_below_starting_price() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        let result = do_bid(&mut host, BIDDER_1, id, Amount::from_micro_ccd(99_999), T0 + 1);
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));
    }

    #[concordium_test]
    fn test_seller_cannot_bid() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        let result = do_bid(&mut host, SELLER, id, Amount::from_micro_ccd(100_000), T0 + 1);
        claim_eq!(result, Err(CustomContractError::OwnerForbidden.into()));
    }

    #[concordium_test]
    fn test_bid_after_end() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        let result = do_bid(
            &mut host,
            BIDDER_1,
            id,
            Amount::from_micro_ccd(100_000),
            T0 + DAY_MILLIS,
        );
        claim_eq!(result, Err(CustomContractError::AuctionEnded.into()));
    }

    #[concordium_test]
    fn test_bid_on_finalized_auction_reports_ended() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");
        do_bid(&mut host, BIDDER_1, id, Amount::from_ccd(1), T0 + 1)
            .expect_report("Bid failed");
        do_finalize(&mut host, id, T0 + DAY_MILLIS).expect_report("Finalize failed");

        let result = do_bid(
            &mut host,
            BIDDER_2,
            id,
            Amount::from_ccd(2),
            T0 + DAY_MILLIS + 1,
        );
        claim_eq!(result, Err(CustomContractError::AuctionEnded.into()));
    }

    #[concordium_test]
    fn test_bid_on_cancelled_auction_reports_ended() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");
        do_cancel_auction(&mut host, SELLER, id).expect_report("Cancel failed");

        // The end time is still ahead, the terminal status alone rejects.
        let result = do_bid(&mut host, BIDDER_1, id, Amount::from_micro_ccd(100_000), T0 + 1);
        claim_eq!(result, Err(CustomContractError::AuctionEnded.into()));
    }

    #[concordium_test]
    fn test_finalize_with_winner() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");
        do_bid(&mut host, BIDDER_1, id, Amount::from_ccd(1), T0 + 1)
            .expect_report("Bid failed");

        do_finalize(&mut host, id, T0 + DAY_MILLIS).expect_report("Finalize failed");

        // The 1 CCD escrow splits at 2.5% platform fee and 5% royalty.
        claim!(host.transfer_occurred(&BENEFICIARY, Amount::from_micro_ccd(25_000)));
        claim!(host.transfer_occurred(&ARTIST, Amount::from_micro_ccd(50_000)));
        claim!(host.transfer_occurred(&SELLER, Amount::from_micro_ccd(925_000)));

        let auction = host.state().auction(id).expect_report("Auction missing");
        claim_eq!(auction.status, AuctionStatus::Finalized);
        claim_eq!(host.state().trade_for(&token()), None);
    }

    #[concordium_test]
    fn test_finalize_before_end() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        let result = do_finalize(&mut host, id, T0 + DAY_MILLIS - 1);
        claim_eq!(result, Err(CustomContractError::NotYetEnded.into()));
    }

    #[concordium_test]
    fn test_finalize_is_idempotent_in_rejection() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");
        do_bid(&mut host, BIDDER_1, id, Amount::from_ccd(1), T0 + 1)
            .expect_report("Bid failed");

        do_finalize(&mut host, id, T0 + DAY_MILLIS).expect_report("Finalize failed");
        let result = do_finalize(&mut host, id, T0 + DAY_MILLIS + 1);
        claim_eq!(result, Err(CustomContractError::AlreadyFinalized.into()));
    }

    #[concordium_test]
    fn test_finalize_without_bids_moves_nothing() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        do_finalize(&mut host, id, T0 + DAY_MILLIS).expect_report("Finalize failed");

        claim_eq!(host.get_transfers().len(), 0);
        let auction = host.state().auction(id).expect_report("Auction missing");
        claim_eq!(auction.status, AuctionStatus::Finalized);
        claim_eq!(host.state().trade_for(&token()), None);
    }

    #[concordium_test]
    fn test_cancel_auction_without_bids() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");

        let result = do_cancel_auction(&mut host, OUTSIDER, id);
        claim_eq!(result, Err(CustomContractError::NotSeller.into()));

        do_cancel_auction(&mut host, SELLER, id).expect_report("Cancel failed");
        claim_eq!(host.state().trade_for(&token()), None);
    }

    #[concordium_test]
    fn test_cancel_auction_with_bid_is_not_permitted() {
        let mut host = new_host();
        mock_factory(&mut host, Address::Account(SELLER));

        let id = do_create_auction(
            &mut host,
            SELLER,
            token(),
            Amount::from_micro_ccd(100_000),
            DAY_SECONDS,
            T0,
        )
        .expect_report("Auction failed");
        do_bid(&mut host, BIDDER_1, id, Amount::from_micro_ccd(100_000), T0 + 1)
            .expect_report("Bid failed");

        let result = do_cancel_auction(&mut host, SELLER, id);
        claim_eq!(result, Err(CustomContractError::OperationNotPermitted.into()));
    }

    #[concordium_test]
    fn test_update_config_is_maintainer_gated() {
        let mut host = new_host();

        let value = ConfigValue::PlatformFee(BasisPoints::new(500));
        let bytes = to_bytes(&value);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER)).set_parameter(&bytes);
        let result = update_config(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        update_config(&ctx, &mut host).expect_report("Owner update failed");
        claim_eq!(host.state().platform_fee, BasisPoints::new(500));
    }
}
