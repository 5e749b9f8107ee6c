use crate::endpoints::{
    audit_log::{GetAuditLogEntry, GetAuditLogEventType, ListAuditLogEntries, ListAuditLogEventTypes},
    auth::{Login, Logout, RefreshToken, Register},
    card_database_logs::{
        GetCardDatabaseLog, ListCardDatabaseLogEntries, ListCardDatabaseLogs, PruneCardDatabaseLog,
    },
    card_grades::{
        CreateCardGrade, DeleteCardGrade, GetCardGrade, ListCardGrades, NewCardGrade,
        UpdateCardGrade,
    },
    card_lists::{
        BulkReplaceCardListEntries, GetCardList, ListCardListEntries, ListCardLists,
        NewCardListEntry, RecalculateCardListCounts, RegenerateCardListSlugs,
    },
    card_variant_types::{
        CreateCardVariantType, DeleteCardVariantType, GetCardVariantType, ListCardVariantTypes,
        NewCardVariantType, UpdateCardVariantType,
    },
    card_variants::{
        CreateCardVariant, DeleteCardVariant, GetCardVariant, ListCardVariantPrices,
        ListCardVariants, NewCardVariant, RecalculateCardVariantValues, UpdateCardVariant,
    },
    cards::{
        GetCard, ListCardPrices, ListCards, RecalculateCardCachedValues, RegenerateCardSlugs,
        RegenerateCardSurrogateNumbersAndFullNames,
    },
    catalog::*,
    collections::{
        AddCollectionCard, CreateCollection, DeleteCollection, GetCollection,
        InvalidateCardListCache, InvalidateExpansionCache, ListCollectionCards, ListCollections,
        NewCollection, RemoveCollectionCard, UpdateCollection, UpdateCollectionCard,
    },
    configuration::{GetAllowedExternalAccountHosts, GetBaseTcgCurrency},
    expansions::{
        GetExpansion, ListExpansions, RecalculateExpansionCardCounts, RegenerateExpansionSlugs,
    },
    health::GetHealth,
    images::{CreateImage, DeleteImage, GetImage, ListImages},
    news_posts::{CreateNewsPost, DeleteNewsPost, GetNewsPost, ListNewsPosts, UpdateNewsPost},
    prices::{GetCardListPrice, GetExpansionPrice, ListCardListPrices, ListExpansionPrices},
    reference_data::*,
    references::*,
    sets::{GetCardSet, GetSet, ListCardSets, ListSetCards, ListSets},
    statistics::GetStatistics,
    users::{
        CreateUser, DeleteCurrentUser, DeleteUser, DisableUserPremium,
        EnableUserPremiumWithoutSubscription, GenerateApiAccessToken, GetCurrentUser, GetUser,
        GetUserCount, GetUserPermissions, GetUserPreferences, ListUsers, PruneActivityLogs,
        RevokeApiAccessToken, UpdateCurrentUser, UpdateUser, UpdateUserPreferences,
        UserPreferences,
    },
};

pub struct SystemRepository;

impl SystemRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn health(&self) -> GetHealth {
        GetHealth::new()
    }

    pub fn statistics(&self) -> GetStatistics {
        GetStatistics
    }

    pub fn allowed_external_account_hosts(&self) -> GetAllowedExternalAccountHosts {
        GetAllowedExternalAccountHosts
    }

    pub fn base_tcg_currency(&self) -> GetBaseTcgCurrency {
        GetBaseTcgCurrency
    }
}

pub struct AuthRepository;

impl AuthRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn login(&self, username: impl Into<String>, password: impl Into<String>) -> Login {
        Login::new(username, password)
    }

    pub fn register(
        &self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Register {
        Register::new(username, email, password)
    }

    pub fn logout(&self) -> Logout {
        Logout::new()
    }

    pub fn refresh(&self) -> RefreshToken {
        RefreshToken::new()
    }
}

pub struct AuditLogRepository;

impl AuditLogRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListAuditLogEntries {
        ListAuditLogEntries::new()
    }

    pub fn get(&self, id: i64) -> GetAuditLogEntry {
        GetAuditLogEntry::new(id)
    }

    pub fn event_types(&self) -> ListAuditLogEventTypes {
        ListAuditLogEventTypes::new()
    }

    pub fn event_type(&self, id: i64) -> GetAuditLogEventType {
        GetAuditLogEventType::new(id)
    }
}

pub struct CardRepository;

impl CardRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCards {
        ListCards::new()
    }

    pub fn get(&self, id: i64) -> GetCard {
        GetCard::new(id)
    }

    pub fn prices(&self, card_id: i64) -> ListCardPrices {
        ListCardPrices::new(card_id)
    }

    pub fn recalculate_cached_values(&self) -> RecalculateCardCachedValues {
        RecalculateCardCachedValues::new()
    }

    pub fn regenerate_slugs(&self) -> RegenerateCardSlugs {
        RegenerateCardSlugs::new()
    }

    pub fn regenerate_surrogate_numbers_and_full_names(
        &self,
    ) -> RegenerateCardSurrogateNumbersAndFullNames {
        RegenerateCardSurrogateNumbersAndFullNames::new()
    }
}

pub struct CardVariantRepository;

impl CardVariantRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCardVariants {
        ListCardVariants::new()
    }

    pub fn get(&self, id: i64) -> GetCardVariant {
        GetCardVariant::new(id)
    }

    pub fn create(&self, variant: NewCardVariant) -> CreateCardVariant {
        CreateCardVariant::new(variant)
    }

    pub fn update(&self, id: i64, variant: NewCardVariant) -> UpdateCardVariant {
        UpdateCardVariant::new(id, variant)
    }

    pub fn delete(&self, id: i64) -> DeleteCardVariant {
        DeleteCardVariant::new(id)
    }

    pub fn prices(&self, variant_id: i64) -> ListCardVariantPrices {
        ListCardVariantPrices::new(variant_id)
    }

    pub fn recalculate_values(&self) -> RecalculateCardVariantValues {
        RecalculateCardVariantValues::new()
    }

    pub fn types(&self) -> ListCardVariantTypes {
        ListCardVariantTypes::new()
    }

    pub fn get_type(&self, id: i64) -> GetCardVariantType {
        GetCardVariantType::new(id)
    }

    pub fn create_type(&self, variant_type: NewCardVariantType) -> CreateCardVariantType {
        CreateCardVariantType::new(variant_type)
    }

    pub fn update_type(&self, id: i64, variant_type: NewCardVariantType) -> UpdateCardVariantType {
        UpdateCardVariantType::new(id, variant_type)
    }

    pub fn delete_type(&self, id: i64) -> DeleteCardVariantType {
        DeleteCardVariantType::new(id)
    }
}

pub struct CardGradeRepository;

impl CardGradeRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCardGrades {
        ListCardGrades::new()
    }

    pub fn get(&self, id: i64) -> GetCardGrade {
        GetCardGrade::new(id)
    }

    pub fn create(&self, grade: NewCardGrade) -> CreateCardGrade {
        CreateCardGrade::new(grade)
    }

    pub fn update(&self, id: i64, grade: NewCardGrade) -> UpdateCardGrade {
        UpdateCardGrade::new(id, grade)
    }

    pub fn delete(&self, id: i64) -> DeleteCardGrade {
        DeleteCardGrade::new(id)
    }
}

pub struct CardListRepository;

impl CardListRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCardLists {
        ListCardLists::new()
    }

    pub fn get(&self, id: i64) -> GetCardList {
        GetCardList::new(id)
    }

    pub fn entries(&self, card_list_id: i64) -> ListCardListEntries {
        ListCardListEntries::new(card_list_id)
    }

    pub fn replace_entries(
        &self,
        card_list_id: i64,
        entries: Vec<NewCardListEntry>,
    ) -> BulkReplaceCardListEntries {
        BulkReplaceCardListEntries::new(card_list_id, entries)
    }

    pub fn recalculate_card_counts(&self) -> RecalculateCardListCounts {
        RecalculateCardListCounts::new()
    }

    pub fn regenerate_slugs(&self) -> RegenerateCardListSlugs {
        RegenerateCardListSlugs::new()
    }

    pub fn prices(&self) -> ListCardListPrices {
        ListCardListPrices::new()
    }

    pub fn price(&self, id: i64) -> GetCardListPrice {
        GetCardListPrice::new(id)
    }
}

pub struct SetRepository;

impl SetRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListSets {
        ListSets::new()
    }

    pub fn get(&self, id: i64) -> GetSet {
        GetSet::new(id)
    }

    pub fn cards(&self, set_id: i64) -> ListSetCards {
        ListSetCards::new(set_id)
    }

    pub fn card_sets(&self) -> ListCardSets {
        ListCardSets::new()
    }

    pub fn card_set(&self, id: i64) -> GetCardSet {
        GetCardSet::new(id)
    }
}

pub struct ExpansionRepository;

impl ExpansionRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListExpansions {
        ListExpansions::new()
    }

    pub fn get(&self, id: i64) -> GetExpansion {
        GetExpansion::new(id)
    }

    pub fn recalculate_card_counts(&self) -> RecalculateExpansionCardCounts {
        RecalculateExpansionCardCounts::new()
    }

    pub fn regenerate_slugs(&self) -> RegenerateExpansionSlugs {
        RegenerateExpansionSlugs::new()
    }

    pub fn prices(&self) -> ListExpansionPrices {
        ListExpansionPrices::new()
    }

    pub fn price(&self, id: i64) -> GetExpansionPrice {
        GetExpansionPrice::new(id)
    }

    pub fn series(&self) -> ListExpansionSeries {
        ListExpansionSeries::new()
    }
}

pub struct CollectionRepository;

impl CollectionRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCollections {
        ListCollections::new()
    }

    pub fn get(&self, id: i64) -> GetCollection {
        GetCollection::new(id)
    }

    pub fn create(&self, name: impl Into<String>) -> CreateCollection {
        CreateCollection::new(name)
    }

    pub fn update(&self, id: i64, collection: NewCollection) -> UpdateCollection {
        UpdateCollection::new(id, collection)
    }

    pub fn delete(&self, id: i64) -> DeleteCollection {
        DeleteCollection::new(id)
    }

    pub fn cards(&self, collection_id: i64) -> ListCollectionCards {
        ListCollectionCards::new(collection_id)
    }

    pub fn add_card(&self, collection_id: i64, card_id: i64, quantity: i64) -> AddCollectionCard {
        AddCollectionCard::new(collection_id, card_id, quantity)
    }

    pub fn update_card(
        &self,
        collection_id: i64,
        card_id: i64,
        quantity: i64,
    ) -> UpdateCollectionCard {
        UpdateCollectionCard::new(collection_id, card_id, quantity)
    }

    pub fn remove_card(&self, collection_id: i64, card_id: i64) -> RemoveCollectionCard {
        RemoveCollectionCard::new(collection_id, card_id)
    }

    pub fn invalidate_card_list_cache(&self) -> InvalidateCardListCache {
        InvalidateCardListCache::new()
    }

    pub fn invalidate_expansion_cache(&self) -> InvalidateExpansionCache {
        InvalidateExpansionCache::new()
    }
}

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListUsers {
        ListUsers::new()
    }

    pub fn get(&self, id: i64) -> GetUser {
        GetUser::new(id)
    }

    pub fn create(
        &self,
        display_name: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
    ) -> CreateUser {
        CreateUser::new(display_name, email_address, password)
    }

    pub fn update(&self, id: i64) -> UpdateUser {
        UpdateUser::new(id)
    }

    pub fn delete(&self, id: i64) -> DeleteUser {
        DeleteUser::new(id)
    }

    pub fn me(&self) -> GetCurrentUser {
        GetCurrentUser::new()
    }

    pub fn update_me(&self) -> UpdateCurrentUser {
        UpdateCurrentUser::new()
    }

    pub fn delete_me(&self) -> DeleteCurrentUser {
        DeleteCurrentUser::new()
    }

    pub fn preferences(&self, user_id: i64) -> GetUserPreferences {
        GetUserPreferences::new(user_id)
    }

    pub fn update_preferences(
        &self,
        user_id: i64,
        preferences: UserPreferences,
    ) -> UpdateUserPreferences {
        UpdateUserPreferences::new(user_id, preferences)
    }

    pub fn count(&self) -> GetUserCount {
        GetUserCount
    }

    pub fn prune_activity_logs(&self) -> PruneActivityLogs {
        PruneActivityLogs::new()
    }

    pub fn disable_premium(&self, user_id: i64) -> DisableUserPremium {
        DisableUserPremium::new(user_id)
    }

    pub fn enable_premium_without_subscription(
        &self,
        user_id: i64,
    ) -> EnableUserPremiumWithoutSubscription {
        EnableUserPremiumWithoutSubscription::new(user_id)
    }

    pub fn generate_api_access_token(&self, user_id: i64) -> GenerateApiAccessToken {
        GenerateApiAccessToken::new(user_id)
    }

    pub fn revoke_api_access_token(&self, user_id: i64) -> RevokeApiAccessToken {
        RevokeApiAccessToken::new(user_id)
    }

    pub fn permissions(&self, user_id: i64) -> GetUserPermissions {
        GetUserPermissions::new(user_id)
    }
}

pub struct ImageRepository;

impl ImageRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListImages {
        ListImages::new()
    }

    pub fn get(&self, id: i64) -> GetImage {
        GetImage::new(id)
    }

    pub fn create(&self, file: impl Into<Vec<u8>>) -> CreateImage {
        CreateImage::new(file)
    }

    pub fn delete(&self, id: i64) -> DeleteImage {
        DeleteImage::new(id)
    }
}

pub struct NewsPostRepository;

impl NewsPostRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListNewsPosts {
        ListNewsPosts::new()
    }

    pub fn get(&self, id: i64) -> GetNewsPost {
        GetNewsPost::new(id)
    }

    pub fn create(&self, title: impl Into<String>, content: impl Into<String>) -> CreateNewsPost {
        CreateNewsPost::new(title, content)
    }

    pub fn update(
        &self,
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> UpdateNewsPost {
        UpdateNewsPost::new(id, title, content)
    }

    pub fn delete(&self, id: i64) -> DeleteNewsPost {
        DeleteNewsPost::new(id)
    }
}

pub struct CardDatabaseLogRepository;

impl CardDatabaseLogRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCardDatabaseLogs {
        ListCardDatabaseLogs::new()
    }

    pub fn get(&self, id: i64) -> GetCardDatabaseLog {
        GetCardDatabaseLog::new(id)
    }

    pub fn entries(&self) -> ListCardDatabaseLogEntries {
        ListCardDatabaseLogEntries::new()
    }

    pub fn prune(&self) -> PruneCardDatabaseLog {
        PruneCardDatabaseLog::new()
    }
}

/// Lookup tables, plain and paginated.
pub struct CatalogRepository;

impl CatalogRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn card_conditions(&self) -> ListCardConditions {
        ListCardConditions::new()
    }

    pub fn card_condition(&self, id: i64) -> GetCardCondition {
        GetCardCondition::new(id)
    }

    pub fn card_rarities(&self) -> ListCardRarities {
        ListCardRarities::new()
    }

    pub fn card_rarity(&self, id: i64) -> GetCardRarity {
        GetCardRarity::new(id)
    }

    pub fn card_types(&self) -> ListCardTypes {
        ListCardTypes::new()
    }

    pub fn card_type(&self, id: i64) -> GetCardType {
        GetCardType::new(id)
    }

    pub fn card_supertypes(&self) -> ListCardSupertypes {
        ListCardSupertypes::new()
    }

    pub fn card_supertype(&self, id: i64) -> GetCardSupertype {
        GetCardSupertype::new(id)
    }

    pub fn card_languages(&self) -> ListCardLanguages {
        ListCardLanguages::new()
    }

    pub fn card_language(&self, id: i64) -> GetCardLanguage {
        GetCardLanguage::new(id)
    }

    pub fn card_formats(&self) -> ListCardFormats {
        ListCardFormats::new()
    }

    pub fn card_format(&self, id: i64) -> GetCardFormat {
        GetCardFormat::new(id)
    }

    pub fn currencies(&self) -> ListCurrencies {
        ListCurrencies::new()
    }

    pub fn currency(&self, id: i64) -> GetCurrency {
        GetCurrency::new(id)
    }

    pub fn energy_types(&self) -> ListEnergyTypes {
        ListEnergyTypes::new()
    }

    pub fn energy_type(&self, id: i64) -> GetEnergyType {
        GetEnergyType::new(id)
    }

    pub fn card_effect_types(&self) -> ListCardEffectTypes {
        ListCardEffectTypes::new()
    }

    pub fn card_effect_type(&self, id: i64) -> GetCardEffectType {
        GetCardEffectType::new(id)
    }

    pub fn card_grade_companies(&self) -> ListCardGradeCompanies {
        ListCardGradeCompanies::new()
    }

    pub fn card_grade_company(&self, id: i64) -> GetCardGradeCompany {
        GetCardGradeCompany::new(id)
    }

    pub fn card_illustrators(&self) -> ListCardIllustrators {
        ListCardIllustrators::new()
    }

    pub fn card_illustrator(&self, id: i64) -> GetCardIllustrator {
        GetCardIllustrator::new(id)
    }

    pub fn pokemon_stages(&self) -> ListPokemonStages {
        ListPokemonStages::new()
    }

    pub fn pokemon_stage(&self, id: i64) -> GetPokemonStage {
        GetPokemonStage::new(id)
    }

    pub fn regulation_marks(&self) -> ListRegulationMarks {
        ListRegulationMarks::new()
    }

    pub fn regulation_mark(&self, id: i64) -> GetRegulationMark {
        GetRegulationMark::new(id)
    }

    pub fn tcg_regions(&self) -> ListTcgRegions {
        ListTcgRegions::new()
    }

    pub fn tcg_region(&self, id: i64) -> GetTcgRegion {
        GetTcgRegion::new(id)
    }

    pub fn tcg_price_sources(&self) -> ListTcgPriceSources {
        ListTcgPriceSources::new()
    }

    pub fn tcg_price_source(&self, id: i64) -> GetTcgPriceSource {
        GetTcgPriceSource::new(id)
    }

    pub fn entity_types(&self) -> ListEntityTypes {
        ListEntityTypes::new()
    }

    pub fn entity_type(&self, id: i64) -> GetEntityType {
        GetEntityType::new(id)
    }

    pub fn expansion_series(&self, id: i64) -> GetExpansionSeries {
        GetExpansionSeries::new(id)
    }
}

/// Cross references between catalog entities and external ids.
pub struct ReferenceRepository;

impl ReferenceRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn cards(&self) -> ListCardReferences {
        ListCardReferences::new()
    }

    pub fn card(&self, id: i64) -> GetCardReference {
        GetCardReference::new(id)
    }

    pub fn expansions(&self) -> ListExpansionReferences {
        ListExpansionReferences::new()
    }

    pub fn expansion(&self, id: i64) -> GetExpansionReference {
        GetExpansionReference::new(id)
    }

    pub fn card_lists(&self) -> ListCardListReferences {
        ListCardListReferences::new()
    }

    pub fn card_list(&self, id: i64) -> GetCardListReference {
        GetCardListReference::new(id)
    }

    pub fn card_variants(&self) -> ListCardVariantReferences {
        ListCardVariantReferences::new()
    }

    pub fn card_variant(&self, id: i64) -> GetCardVariantReference {
        GetCardVariantReference::new(id)
    }
}
