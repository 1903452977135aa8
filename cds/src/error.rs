use thiserror::Error;

/// Error types for `Vector` and `Graph` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VectorError {
    /// The memory strategy is missing one of its allocate/reallocate/deallocate hooks
    #[error("Invalid memory strategy: allocate, reallocate and deallocate are all required")]
    InvalidStrategy,
    /// The memory strategy could not provide the requested block
    #[error("Allocation failed: could not obtain {requested} bytes")]
    AllocationFailed {
        /// Number of bytes requested
        requested: usize,
    },
    /// The requested capacity does not fit in the address space
    #[error("Capacity overflow: {requested} elements cannot be addressed")]
    CapacityOverflow {
        /// Number of elements requested
        requested: usize,
    },
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Operation needs at least one element
    #[error("Operation on empty vector")]
    EmptyVector,
    /// `resize` was asked to grow without an initializer element
    #[error("Resize needs an initializer to grow the vector")]
    MissingInitializer,
    /// Node is not part of the graph
    #[error("Node out of range: node {node} is beyond node count {nodes}")]
    NodeOutOfRange {
        /// Node that was accessed
        node: usize,
        /// Number of nodes in the graph
        nodes: usize,
    },
}
