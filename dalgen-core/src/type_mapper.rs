//! Type mapping between storage column types and target language types.

/// Families of storage types the generator knows about.
///
/// Storage type names are matched case-insensitively. Anything not listed
/// here is unrecognized and passes through the mapper unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageFamily {
    /// `varchar`, `nvarchar`
    VariableText,
    /// `ntext`, `text`
    LongText,
    /// `datetime`, `smalldatetime`
    DateTime,
    /// `smallint`, `tinyint`
    SmallInteger,
    /// `uniqueidentifier`
    UniqueIdentifier,
    /// `bit`
    Flag,
    /// `money`
    Currency,
    /// `int`, `bigint`
    Integer,
}

impl StorageFamily {
    /// Classify a raw storage type name.
    pub fn classify(storage_type: &str) -> Option<Self> {
        let family = match storage_type.to_ascii_lowercase().as_str() {
            "varchar" | "nvarchar" => Self::VariableText,
            "ntext" | "text" => Self::LongText,
            "datetime" | "smalldatetime" => Self::DateTime,
            "smallint" | "tinyint" => Self::SmallInteger,
            "uniqueidentifier" => Self::UniqueIdentifier,
            "bit" => Self::Flag,
            "money" => Self::Currency,
            "int" | "bigint" => Self::Integer,
            _ => return None,
        };
        Some(family)
    }

    /// Whether values of this family are references in the target language,
    /// so nullability does not change the mapped type.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::VariableText | Self::LongText)
    }

    /// Whether the family carries a declared character length.
    pub fn is_variable_character(&self) -> bool {
        matches!(self, Self::VariableText)
    }

    /// Whether the family is an unbounded large-text type.
    pub fn is_long_text(&self) -> bool {
        matches!(self, Self::LongText)
    }
}

/// Trait for mapping storage types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a recognized storage family to a non-nullable type name
    fn map_family(&self, family: StorageFamily) -> &'static str;

    /// Wrap a value type so it can hold null
    fn map_nullable(&self, type_name: &str) -> String {
        format!("{}?", type_name)
    }

    /// Map a raw storage type, adjusted for nullability.
    ///
    /// Unrecognized storage types are returned verbatim.
    fn map(&self, storage_type: &str, is_nullable: bool) -> String {
        match StorageFamily::classify(storage_type) {
            Some(family) if is_nullable && !family.is_reference() => {
                self.map_nullable(self.map_family(family))
            }
            Some(family) => self.map_family(family).to_string(),
            None => storage_type.to_string(),
        }
    }
}

/// C# type mapper implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn map_family(&self, family: StorageFamily) -> &'static str {
        match family {
            StorageFamily::VariableText | StorageFamily::LongText => "string",
            StorageFamily::DateTime => "DateTime",
            StorageFamily::SmallInteger => "short",
            StorageFamily::UniqueIdentifier => "Guid",
            StorageFamily::Flag => "bool",
            StorageFamily::Currency => "decimal",
            StorageFamily::Integer => "int",
        }
    }
}
