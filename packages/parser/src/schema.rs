//! The fixed MeSH descriptor schema vocabulary and bundled DTD resources.
//!
//! Element and attribute names are enumerated here so that handlers and
//! tests share one definition. The distribution's external DTD references
//! must resolve to the copies bundled with this crate; any other reference
//! is a fatal parse error rather than a network fetch.

use crate::error::{MeshError, Result};

// Element names, in schema order of first appearance.
pub const DESCRIPTOR_RECORD: &str = "DescriptorRecord";
pub const DESCRIPTOR_UI: &str = "DescriptorUI";
pub const DESCRIPTOR_NAME: &str = "DescriptorName";
pub const DESCRIPTOR_REFERRED_TO: &str = "DescriptorReferredTo";
pub const STRING: &str = "String";
pub const DATE_CREATED: &str = "DateCreated";
pub const DATE_REVISED: &str = "DateRevised";
pub const DATE_ESTABLISHED: &str = "DateEstablished";
pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";
pub const DAY: &str = "Day";
pub const ACTIVE_MESH_YEAR_LIST: &str = "ActiveMeSHYearList";
pub const ALLOWABLE_QUALIFIERS_LIST: &str = "AllowableQualifiersList";
pub const ALLOWABLE_QUALIFIER: &str = "AllowableQualifier";
pub const QUALIFIER_REFERRED_TO: &str = "QualifierReferredTo";
pub const QUALIFIER_UI: &str = "QualifierUI";
pub const QUALIFIER_NAME: &str = "QualifierName";
pub const ABBREVIATION: &str = "Abbreviation";
pub const ANNOTATION: &str = "Annotation";
pub const HISTORY_NOTE: &str = "HistoryNote";
pub const ONLINE_NOTE: &str = "OnlineNote";
pub const PUBLIC_MESH_NOTE: &str = "PublicMeSHNote";
pub const PREVIOUS_INDEXING_LIST: &str = "PreviousIndexingList";
pub const PREVIOUS_INDEXING: &str = "PreviousIndexing";
pub const ENTRY_COMBINATION_LIST: &str = "EntryCombinationList";
pub const ENTRY_COMBINATION: &str = "EntryCombination";
pub const ECIN: &str = "ECIN";
pub const ECOUT: &str = "ECOUT";
pub const SEE_RELATED_LIST: &str = "SeeRelatedList";
pub const CONSIDER_ALSO: &str = "ConsiderAlso";
pub const PHARMACOLOGICAL_ACTION_LIST: &str = "PharmacologicalActionList";
pub const PHARMACOLOGICAL_ACTION: &str = "PharmacologicalAction";
pub const RUNNING_HEAD: &str = "RunningHead";
pub const TREE_NUMBER_LIST: &str = "TreeNumberList";
pub const TREE_NUMBER: &str = "TreeNumber";
pub const RECORD_ORIGINATORS_LIST: &str = "RecordOriginatorsList";
pub const RECORD_ORIGINATOR: &str = "RecordOriginator";
pub const RECORD_MAINTAINER: &str = "RecordMaintainer";
pub const RECORD_AUTHORIZER: &str = "RecordAuthorizer";
pub const CONCEPT_LIST: &str = "ConceptList";
pub const CONCEPT: &str = "Concept";
pub const CONCEPT_UI: &str = "ConceptUI";
pub const CONCEPT_NAME: &str = "ConceptName";
pub const CONCEPT_UMLS_UI: &str = "ConceptUMLSUI";
pub const CASN1_NAME: &str = "CASN1Name";
pub const REGISTRY_NUMBER: &str = "RegistryNumber";
pub const SCOPE_NOTE: &str = "ScopeNote";
pub const SEMANTIC_TYPE_LIST: &str = "SemanticTypeList";
pub const SEMANTIC_TYPE: &str = "SemanticType";
pub const SEMANTIC_TYPE_UI: &str = "SemanticTypeUI";
pub const SEMANTIC_TYPE_NAME: &str = "SemanticTypeName";
pub const RELATED_REGISTRY_NUMBER_LIST: &str = "RelatedRegistryNumberList";
pub const RELATED_REGISTRY_NUMBER: &str = "RelatedRegistryNumber";
pub const CONCEPT_RELATION_LIST: &str = "ConceptRelationList";
pub const CONCEPT_RELATION: &str = "ConceptRelation";
pub const CONCEPT_1_UI: &str = "Concept1UI";
pub const CONCEPT_2_UI: &str = "Concept2UI";
pub const RELATION_ATTRIBUTE: &str = "RelationAttribute";
pub const TERM_LIST: &str = "TermList";
pub const TERM: &str = "Term";
pub const TERM_UI: &str = "TermUI";
pub const SORT_VERSION: &str = "SortVersion";
pub const ENTRY_VERSION: &str = "EntryVersion";
pub const THESAURUS_ID_LIST: &str = "ThesaurusIDlist";
pub const THESAURUS_ID: &str = "ThesaurusID";

// Attribute names.
pub const DESCRIPTOR_CLASS_ATT: &str = "DescriptorClass";
pub const PREFERRED_CONCEPT_YN_ATT: &str = "PreferredConceptYN";
pub const CONCEPT_PREFERRED_TERM_YN_ATT: &str = "ConceptPreferredTermYN";
pub const IS_PERMUTED_TERM_YN_ATT: &str = "IsPermutedTermYN";
pub const LEXICAL_TAG_ATT: &str = "LexicalTag";
pub const PRINT_FLAG_YN_ATT: &str = "PrintFlagYN";
pub const RECORD_PREFERRED_TERM_YN_ATT: &str = "RecordPreferredTermYN";
pub const RELATION_NAME_ATT: &str = "RelationName";

/// Attribute value used for all yes/no flags.
pub const YES: &str = "Y";

/// Bundled copy of the 2009 descriptor DTD.
pub const DESC_2009_DTD: &str = include_str!("../resources/desc2009.dtd");

/// Bundled copy of the 2013 descriptor DTD.
pub const DESC_2013_DTD: &str = include_str!("../resources/desc2013.dtd");

/// Resolve the external subset reference of a `<!DOCTYPE ...>` declaration
/// against the bundled DTD copies.
///
/// # Arguments
/// * `doctype` - The text of the DOCTYPE declaration, without the
///   surrounding `<!DOCTYPE` and `>`.
///
/// # Returns
/// The bundled DTD content for a supported reference, or `None` when the
/// declaration carries no external subset at all.
///
/// # Errors
/// Returns `UnresolvedSchemaReference` for any external identifier outside
/// the bundled set. This is a deliberate fatal condition: the parser never
/// fetches schemas over the network.
pub fn resolve_external_subset(doctype: &str) -> Result<Option<&'static str>> {
    let Some(system_id) = external_system_id(doctype) else {
        return Ok(None);
    };

    if system_id.ends_with("desc2013.dtd") {
        Ok(Some(DESC_2013_DTD))
    } else if system_id.ends_with("desc2009.dtd") {
        Ok(Some(DESC_2009_DTD))
    } else {
        Err(MeshError::UnresolvedSchemaReference(system_id.to_string()))
    }
}

/// Extract the system identifier from a DOCTYPE declaration, if any.
///
/// Handles both `SYSTEM "sysid"` and `PUBLIC "pubid" "sysid"` forms; the
/// system identifier is the last quoted token.
fn external_system_id(doctype: &str) -> Option<&str> {
    if !doctype.contains("SYSTEM") && !doctype.contains("PUBLIC") {
        return None;
    }
    // Strip an internal subset before scanning for quotes.
    let external = doctype.split('[').next().unwrap_or(doctype);
    let mut last = None;
    let mut rest = external;
    while let Some(open) = rest.find(['"', '\'']) {
        let quote = rest.as_bytes()[open] as char;
        let tail = &rest[open + 1..];
        let close = tail.find(quote)?;
        last = Some(&tail[..close]);
        rest = &tail[close + 1..];
    }
    last
}
