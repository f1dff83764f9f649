//! GraphQL documents.
//!
//! Content documents are derived from a domain's [`DomainSpec`] and the
//! record's field selection, so every domain speaks the same five
//! operations: paginated list, single item, create, update and delete.

use backoffice_model::{DomainSpec, Record};

/// Selection for the Lighthouse-style paginator block.
const PAGINATOR_FIELDS: &str = "paginatorInfo { currentPage lastPage total hasMorePages }";

pub fn list<T: Record>() -> String {
    list_document(T::DOMAIN.spec(), T::FIELDS)
}

pub fn item<T: Record>() -> String {
    item_document(T::DOMAIN.spec(), T::FIELDS)
}

pub fn create<T: Record>() -> String {
    let spec = T::DOMAIN.spec();
    format!(
        "mutation Create{ty}($input: Create{ty}Input!) {{ create{ty}(input: $input) {{ {fields} }} }}",
        ty = spec.type_name,
        fields = T::FIELDS,
    )
}

pub fn update<T: Record>() -> String {
    let spec = T::DOMAIN.spec();
    format!(
        "mutation Update{ty}($id: ID!, $input: Update{ty}Input!) {{ update{ty}(id: $id, input: $input) {{ {fields} }} }}",
        ty = spec.type_name,
        fields = T::FIELDS,
    )
}

pub fn delete<T: Record>() -> String {
    let spec = T::DOMAIN.spec();
    format!(
        "mutation Delete{ty}($id: ID!) {{ delete{ty}(id: $id) {{ id }} }}",
        ty = spec.type_name,
    )
}

fn list_document(spec: DomainSpec, fields: &str) -> String {
    format!(
        "query {ty}List($first: Int!, $page: Int, $search: String, $application_id: ID) {{ \
         {list}(first: $first, page: $page, search: $search, application_id: $application_id) {{ \
         data {{ {fields} }} {PAGINATOR_FIELDS} }} }}",
        ty = spec.type_name,
        list = spec.list_field,
    )
}

fn item_document(spec: DomainSpec, fields: &str) -> String {
    format!(
        "query {ty}($id: ID!) {{ {item}(id: $id) {{ {fields} }} }}",
        ty = spec.type_name,
        item = spec.item_field,
    )
}

pub const REQUEST_OTP: &str =
    "mutation RequestOtp($email: String!) { requestOtp(email: $email) { success message } }";

pub const VERIFY_OTP: &str = "mutation VerifyOtp($email: String!, $code: String!) { \
                              verifyOtp(email: $email, code: $code) { token user { id name email } } }";

pub const ME: &str = "query Me { me { id name email } }";

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_model::{BlogPost, TeamMember};

    #[test]
    fn list_document_targets_the_list_field() {
        let doc = list::<BlogPost>();
        assert!(doc.starts_with("query BlogPostList("));
        assert!(doc.contains("blogPosts(first: $first, page: $page"));
        assert!(doc.contains("hasMorePages"));
        assert!(doc.contains("view_count"));
    }

    #[test]
    fn mutations_use_the_type_name() {
        assert!(create::<TeamMember>().contains("createTeamMember(input: $input)"));
        assert!(update::<TeamMember>().contains("updateTeamMember(id: $id, input: $input)"));
        assert!(delete::<TeamMember>().contains("deleteTeamMember(id: $id) { id }"));
        assert!(item::<TeamMember>().contains("teamMember(id: $id) { id application_id name"));
    }
}
