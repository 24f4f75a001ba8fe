/*
[INPUT]:  Transaction hashes, raw hex, skeletons and query parameters
[OUTPUT]: Transactions, skeletons, propagation and confidence metadata
[POS]:    HTTP layer - transaction endpoints (https://www.blockcypher.com/dev/bitcoin/#transaction-api)
[UPDATE]: When adding new transaction endpoints or changing query parameters
*/

use crate::http::{BlockcypherClient, Result};
use crate::types::{
    NewTransactionParams, NewTransactionPayload, RawTransactionRequest, SendTransactionResponse,
    Transaction, TransactionByHashParams, TransactionConfidence, TransactionPropagationResponse,
    TransactionSkeleton, UnconfirmedTransactionsParams, WitnessToSignRequest,
    WitnessToSignTransaction,
};
use reqwest::Method;

impl BlockcypherClient {
    /// List unconfirmed transactions
    ///
    /// GET /txs?limit={limit}&minValue={min_value}
    pub async fn get_unconfirmed_transactions(
        &self,
        params: Option<&UnconfirmedTransactionsParams>,
    ) -> Result<Vec<Transaction>> {
        let mut builder = self.request(Method::GET, &["txs"])?;
        if let Some(params) = params {
            builder = builder.query(params);
        }
        self.send_json(builder).await
    }

    /// Get a transaction by hash
    ///
    /// GET /txs/{hash}?limit=&instart=&outstart=&legacyaddrs=&includeHex=&includeConfidence=
    ///
    /// `hash` is sent as given. An empty hash requests `GET /txs/`, the
    /// unconfirmed list, whose array body then fails to decode as a `Transaction`.
    pub async fn get_transaction_by_hash(
        &self,
        hash: &str,
        params: Option<&TransactionByHashParams>,
    ) -> Result<Transaction> {
        let mut builder = self.request(Method::GET, &["txs", hash])?;
        if let Some(params) = params {
            builder = builder.query(params);
        }
        self.send_json(builder).await
    }

    /// Create a transaction skeleton to be signed locally
    ///
    /// POST /txs/new?includeToSignTx={include_to_sign_tx}
    pub async fn new_transaction(
        &self,
        payload: &NewTransactionPayload,
        params: Option<&NewTransactionParams>,
    ) -> Result<TransactionSkeleton> {
        let mut builder = self.request(Method::POST, &["txs", "new"])?.json(payload);
        if let Some(params) = params {
            builder = builder.query(params);
        }
        self.send_json(builder).await
    }

    /// Send a signed skeleton
    ///
    /// POST /txs/send
    pub async fn send_transaction(
        &self,
        skeleton: &TransactionSkeleton,
    ) -> Result<SendTransactionResponse> {
        let builder = self.request(Method::POST, &["txs", "send"])?.json(skeleton);
        self.send_json(builder).await
    }

    /// Broadcast a hex-encoded raw transaction
    ///
    /// POST /txs/push
    pub async fn push_raw_transaction(&self, tx_hex: &str) -> Result<Transaction> {
        let body = RawTransactionRequest {
            tx: tx_hex.to_string(),
        };
        let builder = self.request(Method::POST, &["txs", "push"])?.json(&body);
        self.send_json(builder).await
    }

    /// Decode a hex-encoded raw transaction without broadcasting it
    ///
    /// POST /txs/decode
    pub async fn decode_raw_transaction(&self, tx_hex: &str) -> Result<Transaction> {
        let body = RawTransactionRequest {
            tx: tx_hex.to_string(),
        };
        let builder = self.request(Method::POST, &["txs", "decode"])?.json(&body);
        self.send_json(builder).await
    }

    /// Decode a hex-encoded segwit `tosign_tx` into its BIP143 fields
    ///
    /// POST /txs/decodeWitnessToSign
    pub async fn decode_transaction_witness_to_sign(
        &self,
        witness_tosign_tx_hex: &str,
    ) -> Result<WitnessToSignTransaction> {
        let body = WitnessToSignRequest {
            witness_tosign_tx: witness_tosign_tx_hex.to_string(),
        };
        let builder = self
            .request(Method::POST, &["txs", "decodeWitnessToSign"])?
            .json(&body);
        self.send_json(builder).await
    }

    /// Get where and when the network first saw a transaction
    ///
    /// GET /txs/{hash}/propogation (sic, the API's spelling)
    ///
    /// `hash` is sent as given; an empty hash requests `/txs//propogation`.
    pub async fn get_transaction_propagation(
        &self,
        hash: &str,
    ) -> Result<TransactionPropagationResponse> {
        let builder = self.request(Method::GET, &["txs", hash, "propogation"])?;
        self.send_json(builder).await
    }

    /// Get the confidence that an unconfirmed transaction will be mined
    ///
    /// GET /txs/{hash}/confidence
    ///
    /// `hash` is sent as given; an empty hash requests `/txs//confidence`.
    pub async fn get_transaction_confidence(&self, hash: &str) -> Result<TransactionConfidence> {
        let builder = self.request(Method::GET, &["txs", hash, "confidence"])?;
        self.send_json(builder).await
    }
}
