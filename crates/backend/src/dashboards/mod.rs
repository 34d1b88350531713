pub mod d400_financial_totals;
