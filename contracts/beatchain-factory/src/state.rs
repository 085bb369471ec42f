use super::*;

/// Process wide minting configuration. Mutable only through the
/// maintainer-gated `updateConfig` entrypoint; read once at the start of
/// every mint.
#[derive(Debug, Serialize, SchemaType, Clone, Copy)]
pub struct PlatformConfig {
    /// Lowest accepted payment for a mint.
    pub minimum_mint_price: Amount,
    /// Share of the mint payment routed to the fee recipient.
    pub minting_fee: BasisPoints,
    /// Account receiving minting fees.
    pub fee_recipient: AccountAddress,
}

/// Data of a single minted track token.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct TokenData {
    /// Current holder. Mutated only by marketplace settlement.
    pub owner: Address,
    /// Token metadata locator.
    pub uri: String,
    /// Track record stamped at mint.
    pub metadata: TrackMetadata,
    /// Royalty bound at mint, immutable for all future settlements.
    pub royalty: Royalty,
}

/// One mintable collection. Identity fields are immutable; the token
/// counter is mutated only by mint.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct CollectionData<S: HasStateApi> {
    pub creator: AccountAddress,
    pub name: String,
    pub symbol: String,
    /// Token id handed out by the next mint. Starts at 1, never reused.
    pub next_token_id: u32,
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Authority module for administrative rights management.
    pub authority: Authority<S>,
    /// Minting fee configuration.
    pub config: PlatformConfig,
    /// The only contract allowed to move token ownership.
    pub marketplace: Option<ContractAddress>,
    /// Collection id handed out by the next createCollection. Starts at 1.
    pub next_collection_id: CollectionId,
    /// All collections by id.
    pub collections: StateMap<CollectionId, CollectionData<S>, S>,
    /// Collection ids per creator, in creation order. Duplicate names are
    /// allowed, every collection gets a distinct id.
    pub collections_by_creator: StateMap<AccountAddress, Vec<CollectionId>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Create a new state with no collections.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        config: PlatformConfig,
        origin: AccountAddress,
    ) -> Self {
        State {
            authority: Authority::new(state_builder, Address::Account(origin)),
            config,
            marketplace: None,
            next_collection_id: 1,
            collections: state_builder.new_map(),
            collections_by_creator: state_builder.new_map(),
        }
    }

    /// Record a new collection under the global and the per-creator index.
    pub fn create_collection(
        &mut self,
        state_builder: &mut StateBuilder<S>,
        creator: AccountAddress,
        name: String,
        symbol: String,
    ) -> CollectionId {
        let id = self.next_collection_id;
        self.next_collection_id += 1;

        self.collections.insert(
            id,
            CollectionData {
                creator,
                name,
                symbol,
                next_token_id: 1,
                tokens: state_builder.new_map(),
            },
        );

        let mut by_creator = self
            .collections_by_creator
            .get(&creator)
            .map(|ids| (*ids).clone())
            .unwrap_or_default();
        by_creator.push(id);
        self.collections_by_creator.insert(creator, by_creator);

        id
    }

    /// Mint a token into a collection, assigning the next sequential id.
    pub fn mint(
        &mut self,
        collection: CollectionId,
        data: TokenData,
    ) -> Result<ContractTokenId, CustomContractError> {
        let mut collection = self
            .collections
            .get_mut(&collection)
            .ok_or(CustomContractError::UnknownCollection)?;

        let token_id = TokenIdU32(collection.next_token_id);
        collection.next_token_id += 1;
        collection.tokens.insert(token_id, data);

        Ok(token_id)
    }

    /// Move token ownership. Fails with `NotOwner` unless `from` currently
    /// holds the token. Only ever invoked by marketplace settlement.
    pub fn transfer(
        &mut self,
        token: &TokenRef,
        from: Address,
        to: Address,
    ) -> Result<(), CustomContractError> {
        let collection = self
            .collections
            .get_mut(&token.collection)
            .ok_or(CustomContractError::UnknownCollection)?;

        let mut data = collection
            .tokens
            .get_mut(&token.id)
            .ok_or(CustomContractError::UnknownToken)?;

        ensure!(data.owner == from, CustomContractError::NotOwner);
        data.owner = to;

        Ok(())
    }

    /// Pure ownership lookup.
    pub fn owner_of(&self, token: &TokenRef) -> Result<Address, CustomContractError> {
        self.token_info(token).map(|info| info.owner)
    }

    pub fn token_info(&self, token: &TokenRef) -> Result<TokenInfo, CustomContractError> {
        let collection = self
            .collections
            .get(&token.collection)
            .ok_or(CustomContractError::UnknownCollection)?;

        let data = collection
            .tokens
            .get(&token.id)
            .ok_or(CustomContractError::UnknownToken)?;

        Ok(TokenInfo {
            owner: data.owner,
            royalty: data.royalty,
        })
    }

    /// Collection summary for gallery views.
    pub fn collection_info(&self, id: CollectionId) -> Result<CollectionInfo, CustomContractError> {
        let collection = self
            .collections
            .get(&id)
            .ok_or(CustomContractError::UnknownCollection)?;

        Ok(CollectionInfo {
            creator: collection.creator,
            name: collection.name.clone(),
            symbol: collection.symbol.clone(),
            tokens: collection.next_token_id - 1,
        })
    }

    /// All collection ids in creation order.
    pub fn all_collections(&self) -> Vec<CollectionId> {
        (1..self.next_collection_id).collect()
    }

    /// Collection ids created by an account, in creation order.
    pub fn creator_collections(&self, creator: &AccountAddress) -> Vec<CollectionId> {
        self.collections_by_creator
            .get(creator)
            .map(|ids| (*ids).clone())
            .unwrap_or_default()
    }
}
