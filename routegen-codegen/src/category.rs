//! Parameter categories of a path declaration.

use std::fmt;

/// The six kinds of type a route descriptor carries.
///
/// Each category except [`ParameterCategory::SuccessResponses`] is looked up
/// as a direct child of the path namespace under its own name.
/// `SuccessResponses` is a filtered view of the `Responses` child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterCategory {
    PathParameters,
    Responses,
    SuccessResponses,
    RequestBody,
    QueryParameters,
    HeaderParameters,
}

impl ParameterCategory {
    /// All categories, in descriptor member order.
    pub const ALL: [ParameterCategory; 6] = [
        ParameterCategory::PathParameters,
        ParameterCategory::Responses,
        ParameterCategory::SuccessResponses,
        ParameterCategory::RequestBody,
        ParameterCategory::QueryParameters,
        ParameterCategory::HeaderParameters,
    ];

    /// The category's own tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterCategory::PathParameters => "PathParameters",
            ParameterCategory::Responses => "Responses",
            ParameterCategory::SuccessResponses => "SuccessResponses",
            ParameterCategory::RequestBody => "RequestBody",
            ParameterCategory::QueryParameters => "QueryParameters",
            ParameterCategory::HeaderParameters => "HeaderParameters",
        }
    }

    /// Name of the child declaration this category resolves against.
    pub fn lookup_name(&self) -> &'static str {
        match self {
            ParameterCategory::SuccessResponses => ParameterCategory::Responses.as_str(),
            other => other.as_str(),
        }
    }

    /// Property name in the `Config` descriptor interface.
    pub fn property_name(&self) -> &'static str {
        match self {
            ParameterCategory::PathParameters => "pathParams",
            ParameterCategory::Responses => "responses",
            ParameterCategory::SuccessResponses => "successResponses",
            ParameterCategory::RequestBody => "requestBody",
            ParameterCategory::QueryParameters => "queryParams",
            ParameterCategory::HeaderParameters => "headers",
        }
    }

    /// Whether the category enumerates response members into a union.
    pub fn is_response(&self) -> bool {
        matches!(
            self,
            ParameterCategory::Responses | ParameterCategory::SuccessResponses
        )
    }
}

impl fmt::Display for ParameterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_responses_looks_up_responses() {
        assert_eq!(ParameterCategory::SuccessResponses.lookup_name(), "Responses");
        assert_eq!(ParameterCategory::Responses.lookup_name(), "Responses");
        assert_eq!(
            ParameterCategory::HeaderParameters.lookup_name(),
            "HeaderParameters"
        );
    }

    #[test]
    fn test_property_names_in_order() {
        let names: Vec<_> = ParameterCategory::ALL
            .iter()
            .map(ParameterCategory::property_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "pathParams",
                "responses",
                "successResponses",
                "requestBody",
                "queryParams",
                "headers"
            ]
        );
    }
}
