use crate::domain::entities::StoredBlock;
use crate::domain::errors::SerializationError;
use crate::ports::outbound::BlockSerializer;

/// Record serializer using bincode, the same encoding blocks are hashed in.
#[derive(Default, Clone, Copy)]
pub struct BincodeBlockSerializer;

impl BlockSerializer for BincodeBlockSerializer {
    fn serialize(&self, block: &StoredBlock) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(block).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize(&self, data: &[u8]) -> Result<StoredBlock, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}
