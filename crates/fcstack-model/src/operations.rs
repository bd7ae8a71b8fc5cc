//! FC management operation enum.

use std::fmt;

use http::Method;

/// All supported FC management operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FcOperation {
    // Services
    /// Create a service.
    CreateService,
    /// Update a service.
    UpdateService,
    /// Delete a service.
    DeleteService,
    /// Get a service, optionally at a qualifier.
    GetService,
    /// List services.
    ListServices,

    // Functions
    /// Create a function.
    CreateFunction,
    /// Update a function.
    UpdateFunction,
    /// Delete a function.
    DeleteFunction,
    /// Get a function.
    GetFunction,
    /// Get a download link for a function's code.
    GetFunctionCode,
    /// List functions in a service.
    ListFunctions,
    /// Invoke a function.
    InvokeFunction,

    // Triggers
    /// Create a trigger.
    CreateTrigger,
    /// Update a trigger.
    UpdateTrigger,
    /// Delete a trigger.
    DeleteTrigger,
    /// Get a trigger.
    GetTrigger,
    /// List triggers of a function.
    ListTriggers,

    // Versions
    /// Publish a new service version.
    PublishVersion,
    /// List service versions.
    ListVersions,
    /// Delete a service version.
    DeleteVersion,

    // Aliases
    /// Create an alias.
    CreateAlias,
    /// Update an alias.
    UpdateAlias,
    /// Delete an alias.
    DeleteAlias,
    /// Get an alias.
    GetAlias,
    /// List aliases of a service.
    ListAliases,

    // Tags
    /// Attach tags to a resource.
    TagResource,
    /// Remove tags from a resource.
    UntagResource,
    /// Get the tags of a resource.
    GetResourceTags,

    // Provisioned instances
    /// Set the provisioned instance target.
    PutProvisionConfig,
    /// Get a provision configuration.
    GetProvisionConfig,
    /// List provision configurations.
    ListProvisionConfigs,

    // Reserved capacity
    /// List reserved capacities.
    ListReservedCapacities,

    // Async invocation
    /// Set the async invocation configuration.
    PutFunctionAsyncConfig,
    /// Get the async invocation configuration.
    GetFunctionAsyncConfig,
    /// Delete the async invocation configuration.
    DeleteFunctionAsyncConfig,
    /// List async invocation configurations.
    ListFunctionAsyncConfigs,

    // Custom domains
    /// Create a custom domain.
    CreateCustomDomain,
    /// Update a custom domain.
    UpdateCustomDomain,
    /// Delete a custom domain.
    DeleteCustomDomain,
    /// Get a custom domain.
    GetCustomDomain,
    /// List custom domains.
    ListCustomDomains,
}

impl FcOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateService,
        Self::UpdateService,
        Self::DeleteService,
        Self::GetService,
        Self::ListServices,
        Self::CreateFunction,
        Self::UpdateFunction,
        Self::DeleteFunction,
        Self::GetFunction,
        Self::GetFunctionCode,
        Self::ListFunctions,
        Self::InvokeFunction,
        Self::CreateTrigger,
        Self::UpdateTrigger,
        Self::DeleteTrigger,
        Self::GetTrigger,
        Self::ListTriggers,
        Self::PublishVersion,
        Self::ListVersions,
        Self::DeleteVersion,
        Self::CreateAlias,
        Self::UpdateAlias,
        Self::DeleteAlias,
        Self::GetAlias,
        Self::ListAliases,
        Self::TagResource,
        Self::UntagResource,
        Self::GetResourceTags,
        Self::PutProvisionConfig,
        Self::GetProvisionConfig,
        Self::ListProvisionConfigs,
        Self::ListReservedCapacities,
        Self::PutFunctionAsyncConfig,
        Self::GetFunctionAsyncConfig,
        Self::DeleteFunctionAsyncConfig,
        Self::ListFunctionAsyncConfigs,
        Self::CreateCustomDomain,
        Self::UpdateCustomDomain,
        Self::DeleteCustomDomain,
        Self::GetCustomDomain,
        Self::ListCustomDomains,
    ];

    /// Returns the operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateService => "CreateService",
            Self::UpdateService => "UpdateService",
            Self::DeleteService => "DeleteService",
            Self::GetService => "GetService",
            Self::ListServices => "ListServices",
            Self::CreateFunction => "CreateFunction",
            Self::UpdateFunction => "UpdateFunction",
            Self::DeleteFunction => "DeleteFunction",
            Self::GetFunction => "GetFunction",
            Self::GetFunctionCode => "GetFunctionCode",
            Self::ListFunctions => "ListFunctions",
            Self::InvokeFunction => "InvokeFunction",
            Self::CreateTrigger => "CreateTrigger",
            Self::UpdateTrigger => "UpdateTrigger",
            Self::DeleteTrigger => "DeleteTrigger",
            Self::GetTrigger => "GetTrigger",
            Self::ListTriggers => "ListTriggers",
            Self::PublishVersion => "PublishVersion",
            Self::ListVersions => "ListVersions",
            Self::DeleteVersion => "DeleteVersion",
            Self::CreateAlias => "CreateAlias",
            Self::UpdateAlias => "UpdateAlias",
            Self::DeleteAlias => "DeleteAlias",
            Self::GetAlias => "GetAlias",
            Self::ListAliases => "ListAliases",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
            Self::GetResourceTags => "GetResourceTags",
            Self::PutProvisionConfig => "PutProvisionConfig",
            Self::GetProvisionConfig => "GetProvisionConfig",
            Self::ListProvisionConfigs => "ListProvisionConfigs",
            Self::ListReservedCapacities => "ListReservedCapacities",
            Self::PutFunctionAsyncConfig => "PutFunctionAsyncConfig",
            Self::GetFunctionAsyncConfig => "GetFunctionAsyncConfig",
            Self::DeleteFunctionAsyncConfig => "DeleteFunctionAsyncConfig",
            Self::ListFunctionAsyncConfigs => "ListFunctionAsyncConfigs",
            Self::CreateCustomDomain => "CreateCustomDomain",
            Self::UpdateCustomDomain => "UpdateCustomDomain",
            Self::DeleteCustomDomain => "DeleteCustomDomain",
            Self::GetCustomDomain => "GetCustomDomain",
            Self::ListCustomDomains => "ListCustomDomains",
        }
    }

    /// Parse an operation name string into an `FcOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateService" => Some(Self::CreateService),
            "UpdateService" => Some(Self::UpdateService),
            "DeleteService" => Some(Self::DeleteService),
            "GetService" => Some(Self::GetService),
            "ListServices" => Some(Self::ListServices),
            "CreateFunction" => Some(Self::CreateFunction),
            "UpdateFunction" => Some(Self::UpdateFunction),
            "DeleteFunction" => Some(Self::DeleteFunction),
            "GetFunction" => Some(Self::GetFunction),
            "GetFunctionCode" => Some(Self::GetFunctionCode),
            "ListFunctions" => Some(Self::ListFunctions),
            "InvokeFunction" => Some(Self::InvokeFunction),
            "CreateTrigger" => Some(Self::CreateTrigger),
            "UpdateTrigger" => Some(Self::UpdateTrigger),
            "DeleteTrigger" => Some(Self::DeleteTrigger),
            "GetTrigger" => Some(Self::GetTrigger),
            "ListTriggers" => Some(Self::ListTriggers),
            "PublishVersion" => Some(Self::PublishVersion),
            "ListVersions" => Some(Self::ListVersions),
            "DeleteVersion" => Some(Self::DeleteVersion),
            "CreateAlias" => Some(Self::CreateAlias),
            "UpdateAlias" => Some(Self::UpdateAlias),
            "DeleteAlias" => Some(Self::DeleteAlias),
            "GetAlias" => Some(Self::GetAlias),
            "ListAliases" => Some(Self::ListAliases),
            "TagResource" => Some(Self::TagResource),
            "UntagResource" => Some(Self::UntagResource),
            "GetResourceTags" => Some(Self::GetResourceTags),
            "PutProvisionConfig" => Some(Self::PutProvisionConfig),
            "GetProvisionConfig" => Some(Self::GetProvisionConfig),
            "ListProvisionConfigs" => Some(Self::ListProvisionConfigs),
            "ListReservedCapacities" => Some(Self::ListReservedCapacities),
            "PutFunctionAsyncConfig" => Some(Self::PutFunctionAsyncConfig),
            "GetFunctionAsyncConfig" => Some(Self::GetFunctionAsyncConfig),
            "DeleteFunctionAsyncConfig" => Some(Self::DeleteFunctionAsyncConfig),
            "ListFunctionAsyncConfigs" => Some(Self::ListFunctionAsyncConfigs),
            "CreateCustomDomain" => Some(Self::CreateCustomDomain),
            "UpdateCustomDomain" => Some(Self::UpdateCustomDomain),
            "DeleteCustomDomain" => Some(Self::DeleteCustomDomain),
            "GetCustomDomain" => Some(Self::GetCustomDomain),
            "ListCustomDomains" => Some(Self::ListCustomDomains),
            _ => None,
        }
    }

    /// The HTTP method the operation is sent with.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::GetService
            | Self::ListServices
            | Self::GetFunction
            | Self::GetFunctionCode
            | Self::ListFunctions
            | Self::GetTrigger
            | Self::ListTriggers
            | Self::ListVersions
            | Self::GetAlias
            | Self::ListAliases
            | Self::GetResourceTags
            | Self::GetProvisionConfig
            | Self::ListProvisionConfigs
            | Self::ListReservedCapacities
            | Self::GetFunctionAsyncConfig
            | Self::ListFunctionAsyncConfigs
            | Self::GetCustomDomain
            | Self::ListCustomDomains => Method::GET,
            Self::CreateService
            | Self::CreateFunction
            | Self::InvokeFunction
            | Self::CreateTrigger
            | Self::PublishVersion
            | Self::CreateAlias
            | Self::TagResource
            | Self::CreateCustomDomain => Method::POST,
            Self::UpdateService
            | Self::UpdateFunction
            | Self::UpdateTrigger
            | Self::UpdateAlias
            | Self::PutProvisionConfig
            | Self::PutFunctionAsyncConfig
            | Self::UpdateCustomDomain => Method::PUT,
            Self::DeleteService
            | Self::DeleteFunction
            | Self::DeleteTrigger
            | Self::DeleteVersion
            | Self::DeleteAlias
            | Self::UntagResource
            | Self::DeleteFunctionAsyncConfig
            | Self::DeleteCustomDomain => Method::DELETE,
        }
    }
}

impl fmt::Display for FcOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
