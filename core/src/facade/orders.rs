//! Order manager methods: orders, invoices, receipts, payments.

remote_methods! {
    /// Order manager methods. Obtained from `Baselinker::orders`.
    pub struct Orders;

    /// Order events (journal) from the last three days.
    fn get_journal_list => "getJournalList"(last_log_id, logs_types, order_id);

    /// Extra fields defined for orders. Their values are set through
    /// `set_order_fields` and returned by `get_orders` when
    /// `include_custom_extra_fields` is set.
    fn get_order_extra_fields => "getOrderExtraFields"();

    /// Orders from the order manager, starting at a date or an order id.
    ///
    /// Setting `order_id` returns that single order. Dates are unix
    /// timestamps. `get_unconfirmed_orders` also returns orders whose buyer
    /// has not finished checkout; those may lack shipping details.
    fn get_orders => "getOrders"(;
        order_id, date_confirmed_from, date_from, id_from,
        get_unconfirmed_orders, status_id, filter_email
    );

    /// Order source types and their ids, grouped the same way as the
    /// `order_source` field of `getOrders`.
    fn get_order_sources => "getOrderSources"();

    /// Transaction details for one order. Amazon orders only.
    fn get_order_transaction_details => "getOrderTransactionDetails"(order_id);

    fn get_orders_by_email => "getOrdersByEmail"(email);

    fn get_orders_by_phone => "getOrdersByPhone"(phone);

    /// Issue an invoice for an order using a numbering series.
    fn add_invoice => "addInvoice"(order_id, series_id);

    /// Invoices issued from the order manager.
    fn get_invoices => "getInvoices"(;
        invoice_id, order_id, date_from, id_from, series_id, get_external_invoices
    );

    /// Invoice and receipt numbering series.
    fn get_series => "getSeries"();

    fn get_order_status_list => "getOrderStatusList"();

    /// Payment history of an order. Only the latest entry unless
    /// `show_full_history` is set.
    fn get_order_payments_history => "getOrderPaymentsHistory"(; order_id, show_full_history);

    /// Receipts waiting to be issued, optionally limited to one series.
    fn get_new_receipts => "getNewReceipts"(; series_id);

    /// A single receipt, by receipt id or by order id.
    fn get_receipt => "getReceipt"(; receipt_id, order_id);

    /// Edit selected fields of an order (addresses, comments, delivery).
    /// Fields left out of `options` keep their current value.
    fn set_order_fields => "setOrderFields"(;
        order_id, admin_comments, user_comments, payment_method, payment_method_cod,
        email, phone, user_login, delivery_method, delivery_price, delivery_fullname,
        delivery_company, delivery_address, delivery_postcode, delivery_city,
        delivery_country_code, delivery_point_id, delivery_point_name,
        delivery_point_address, delivery_point_postcode, delivery_point_city,
        invoice_fullname, invoice_company, invoice_nip, invoice_address,
        invoice_postcode, invoice_city, invoice_country_code, want_invoice,
        extra_field_1, extra_field_2, pick_state, pack_state
    );

    /// Add a product line to an order.
    fn add_order_product => "addOrderProduct"(;
        order_id, storage, storage_id, product_id, variant_id, auction_id, name,
        sku, ean, attributes, price_brutto, tax_rate, quantity, weight
    );

    /// Edit one product line of an order (price, quantity and so on).
    fn set_order_product_fields => "setOrderProductFields"(order_id, order_product_id;
        storage, storage_id, product_id, variant_id, auction_id, name, sku, ean,
        attributes, price_brutto, tax_rate, quantity, weight
    );

    fn delete_order_product => "deleteOrderProduct"(order_id, order_product_id);

    /// Record a payment. `payment_done` is the total paid so far, not the
    /// amount of this payment.
    fn set_order_payment => "setOrderPayment"(order_id, payment_done, payment_date, payment_comment);

    fn set_order_status => "setOrderStatus"(order_id, status_id);

    /// Mark a receipt as issued.
    fn set_order_receipt => "setOrderReceipt"(receipt_id, receipt_nr, date; printer_error);

    /// Attach an externally generated invoice file (base64, `data:` prefixed)
    /// to an invoice.
    fn add_order_invoice_file => "addOrderInvoiceFile"(invoice_id, file, external_invoice_number);
}
