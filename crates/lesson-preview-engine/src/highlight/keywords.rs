/// Words highlighted as keywords inside Solidity code blocks.
///
/// Matched whole-word and case-sensitive. Grouped the way lesson authors think
/// about them; the grouping has no effect on matching.
pub const KEYWORDS: &[&str] = &[
    // Reserved words
    "pragma",
    "solidity",
    "import",
    "contract",
    "interface",
    "library",
    "abstract",
    "is",
    "using",
    "function",
    "modifier",
    "constructor",
    "fallback",
    "receive",
    "event",
    "error",
    "struct",
    "enum",
    "mapping",
    "returns",
    "return",
    "if",
    "else",
    "for",
    "while",
    "do",
    "break",
    "continue",
    "new",
    "delete",
    "emit",
    "require",
    "revert",
    "assert",
    "try",
    "catch",
    "unchecked",
    "assembly",
    "override",
    "virtual",
    // Types
    "address",
    "bool",
    "string",
    "bytes",
    "bytes32",
    "byte",
    "int",
    "int8",
    "int256",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uint128",
    "uint256",
    "payable",
    // Visibility and mutability
    "public",
    "private",
    "internal",
    "external",
    "view",
    "pure",
    "constant",
    "immutable",
    "memory",
    "storage",
    "calldata",
    "indexed",
    "anonymous",
    // Global objects
    "msg",
    "block",
    "tx",
    "abi",
    "this",
    "super",
    "true",
    "false",
    // Units
    "wei",
    "gwei",
    "ether",
    "seconds",
    "minutes",
    "hours",
    "days",
    "weeks",
];
